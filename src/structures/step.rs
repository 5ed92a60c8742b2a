/*!
Steps, the per-round bundles of words.

Each round of the compression function has a step, holding the registers A and E, the message word W, the words between (Σ0, Σ1, σ0, σ1, MAJ, CH, T, K), and the carry words of each modular addition.
The first four steps (rounds -4 to -1) only hold the initial registers, as the registers of a round are read up to four rounds later.

Words are identified within a step by their [Role].
*/

use crate::structures::word::WordId;

/// The role of a word within a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    A,
    E,
    W,
    /// Σ0(A), of the previous round.
    Sigma0,
    /// Σ1(E), of the previous round.
    Sigma1,
    /// σ0(W), of round *i* − 15.
    LowerSigma0,
    /// σ1(W), of round *i* − 2.
    LowerSigma1,
    Maj,
    Ch,
    T,
    K,
    /// The carry (into the next column) of the addition for W.
    WCarry,
    /// The carry (into the column after next) of the addition for W.
    WCarryTwo,
    TCarry,
    TCarryTwo,
    ECarry,
    ACarry,
    ACarryTwo,
    /// The sentinel word, whose bits are always zero.
    Zero,
}

impl Role {
    pub const COUNT: usize = 19;

    /// Every role of a word which may be given through configuration.
    pub const CONFIGURABLE: [Role; 18] = [
        Role::A,
        Role::E,
        Role::W,
        Role::Sigma0,
        Role::Sigma1,
        Role::LowerSigma0,
        Role::LowerSigma1,
        Role::Maj,
        Role::Ch,
        Role::T,
        Role::K,
        Role::WCarry,
        Role::WCarryTwo,
        Role::TCarry,
        Role::TCarryTwo,
        Role::ECarry,
        Role::ACarry,
        Role::ACarryTwo,
    ];

    /// The name of the role, as used in configuration.
    pub fn name(self) -> &'static str {
        match self {
            Role::A => "A",
            Role::E => "E",
            Role::W => "W",
            Role::Sigma0 => "S0",
            Role::Sigma1 => "S1",
            Role::LowerSigma0 => "s0",
            Role::LowerSigma1 => "s1",
            Role::Maj => "MAJ",
            Role::Ch => "CH",
            Role::T => "T",
            Role::K => "K",
            Role::WCarry => "Wc1",
            Role::WCarryTwo => "Wc2",
            Role::TCarry => "Tc1",
            Role::TCarryTwo => "Tc2",
            Role::ECarry => "Ec1",
            Role::ACarry => "Ac1",
            Role::ACarryTwo => "Ac2",
            Role::Zero => "zero",
        }
    }

    pub fn from_name(name: &str) -> Option<Role> {
        Role::CONFIGURABLE
            .into_iter()
            .find(|role| role.name() == name)
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Whether the role is a register, carried forward to later rounds.
    pub fn is_register(self) -> bool {
        matches!(self, Role::A | Role::E)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The words of one round.
#[derive(Clone, Debug)]
pub struct Step {
    pub round: i32,
    words: [Option<WordId>; Role::COUNT],
}

impl Step {
    pub fn new(round: i32) -> Self {
        Step {
            round,
            words: [None; Role::COUNT],
        }
    }

    pub fn word(&self, role: Role) -> Option<WordId> {
        self.words[role.index()]
    }

    pub fn set_word(&mut self, role: Role, word: WordId) {
        self.words[role.index()] = Some(word);
    }
}

#[cfg(test)]
mod step_tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for role in Role::CONFIGURABLE {
            assert_eq!(Role::from_name(role.name()), Some(role));
        }
        assert_eq!(Role::from_name("zero"), None);
        assert_eq!(Role::from_name("Q"), None);
    }

    #[test]
    fn indicies_are_distinct() {
        let mut indicies = Role::CONFIGURABLE.map(|role| role.index()).to_vec();
        indicies.push(Role::Zero.index());
        indicies.sort();
        indicies.dedup();
        assert_eq!(indicies.len(), Role::COUNT);
    }
}

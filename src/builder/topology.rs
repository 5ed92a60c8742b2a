/*!
Construction of the topology of a propagator.

For round *i* the step function relates words as follows, with rotations taken modulo the word size:

| word        | defined by                                            |
|-------------|-------------------------------------------------------|
| S0          | Σ0(A<sub>*i*−1</sub>) = ROTR 2 ⊕ ROTR 13 ⊕ ROTR 22          |
| S1          | Σ1(E<sub>*i*−1</sub>) = ROTR 6 ⊕ ROTR 11 ⊕ ROTR 25          |
| MAJ         | MAJ(A<sub>*i*−1</sub>, A<sub>*i*−2</sub>, A<sub>*i*−3</sub>) |
| CH          | CH(E<sub>*i*−1</sub>, E<sub>*i*−2</sub>, E<sub>*i*−3</sub>)  |
| s0 (*i* ≥ 16) | σ0(W<sub>*i*−15</sub>) = ROTR 7 ⊕ ROTR 18 ⊕ SHR 3          |
| s1 (*i* ≥ 16) | σ1(W<sub>*i*−2</sub>) = ROTR 17 ⊕ ROTR 19 ⊕ SHR 10         |
| W (*i* ≥ 16)  | s1 + W<sub>*i*−7</sub> + s0 + W<sub>*i*−16</sub>           |
| T           | E<sub>*i*−4</sub> + S1 + CH + K + W                   |
| E           | A<sub>*i*−4</sub> + T                                 |
| A           | T + S0 + MAJ                                          |

Each addition is an operation whose inputs at column *j* are the addends at *j*, followed by the carry-1 word at *j* − 1 and (if the column sum may reach 4) the carry-2 word at *j* − 2.
Each addition is also recorded as a sum equation, for wordwise propagation.
*/

use crate::{
    db::state::{State, FIRST_ROUND},
    misc::log::targets::{self},
    structures::{
        operation::{OpKind, Operation, SumEquation, SumKind},
        step::{Role, Step},
        word::{SoftWord, Word, WordId},
    },
    types::err::{BuildError, ErrorKind},
};

/// Whether a word of the given role is part of the given round.
pub fn is_applicable(role: Role, round: i32, order: usize) -> bool {
    if round >= order as i32 {
        return false;
    }
    match role {
        Role::A | Role::E => round >= FIRST_ROUND,
        Role::LowerSigma0 | Role::LowerSigma1 | Role::WCarry | Role::WCarryTwo => round >= 16,
        Role::Zero => false,
        _ => round >= 0,
    }
}

/// Whether a word of the given role must be mentioned through configuration.
fn is_required(role: Role) -> bool {
    matches!(role, Role::A | Role::E | Role::W)
}

impl State {
    /// Builds the topology of `order` rounds from the words configured.
    ///
    /// Words which are not required and were never mentioned are added without atoms, and so are always `?`.
    pub(crate) fn build(&mut self, order: usize) -> Result<(), ErrorKind> {
        if self.zero_atoms.is_none() {
            return Err(BuildError::MissingZero.into());
        }
        if let Some((_, round)) = self
            .configured
            .keys()
            .find(|(role, round)| !is_applicable(*role, *round, order))
        {
            return Err(BuildError::RoundOutOfRange(*round).into());
        }

        for round in FIRST_ROUND..order as i32 {
            let mut step = Step::new(round);
            for role in Role::CONFIGURABLE {
                if !is_applicable(role, round, order) {
                    continue;
                }
                let word = match self.configured.get(&(role, round)) {
                    Some(word) => *word,
                    None if is_required(role) => {
                        return Err(BuildError::MissingWord {
                            role: role.name(),
                            round,
                        }
                        .into());
                    }
                    None => {
                        self.words.push(Word::new(role, round, self.word_size));
                        self.words.len() - 1
                    }
                };
                step.set_word(role, word);
            }
            self.steps.push(step);
        }

        for round in 0..order as i32 {
            self.build_round(round);
        }
        self.register_consumers();
        self.order = Some(order);

        log::info!(target: targets::BUILDER, "Built {order} rounds: {} words, {} operations, {} sums", self.words.len(), self.operations.len(), self.sums.len());
        Ok(())
    }

    /// The word of a role and round.
    ///
    /// # Soundness
    /// Steps are assumed built up to the round.
    fn word_of(&self, role: Role, round: i32) -> WordId {
        match self.step(round).and_then(|step| step.word(role)) {
            Some(word) => word,
            None => panic!("! No word {role}_{round}"),
        }
    }

    fn push_operation(
        &mut self,
        kind: OpKind,
        round: i32,
        role: Role,
        inputs: Vec<SoftWord>,
        outputs: Vec<SoftWord>,
    ) {
        let operation = Operation::new(kind, round, role, inputs, outputs, self.word_size);
        log::trace!(target: targets::BUILDER, "Operation {operation}");
        self.operations.push(operation);
    }

    fn push_sum(&mut self, kind: SumKind, round: i32, positive: Vec<WordId>, result: WordId) {
        self.sums.push(SumEquation {
            kind,
            round,
            positive,
            negative: vec![result],
            equations: Vec::default(),
        });
    }

    fn build_round(&mut self, round: i32) {
        let size = self.word_size;
        let at = |role: Role, back: i32| self.word_of(role, round - back);

        let (a1, a2, a3, a4) = (at(Role::A, 1), at(Role::A, 2), at(Role::A, 3), at(Role::A, 4));
        let (e1, e2, e3, e4) = (at(Role::E, 1), at(Role::E, 2), at(Role::E, 3), at(Role::E, 4));
        let (a, e, w, t, k) = (
            at(Role::A, 0),
            at(Role::E, 0),
            at(Role::W, 0),
            at(Role::T, 0),
            at(Role::K, 0),
        );
        let (sigma0, sigma1, maj, ch) = (
            at(Role::Sigma0, 0),
            at(Role::Sigma1, 0),
            at(Role::Maj, 0),
            at(Role::Ch, 0),
        );
        let (t_carry, t_carry_two, e_carry, a_carry, a_carry_two) = (
            at(Role::TCarry, 0),
            at(Role::TCarryTwo, 0),
            at(Role::ECarry, 0),
            at(Role::ACarry, 0),
            at(Role::ACarryTwo, 0),
        );
        let schedule = (round >= 16).then(|| {
            (
                at(Role::W, 2),
                at(Role::W, 7),
                at(Role::W, 15),
                at(Role::W, 16),
                at(Role::LowerSigma0, 0),
                at(Role::LowerSigma1, 0),
                at(Role::WCarry, 0),
                at(Role::WCarryTwo, 0),
            )
        });

        let rotr = |word: WordId, amount: usize| SoftWord::rotr(word, amount % size, size);
        let shr = |word: WordId, amount: usize| SoftWord::shr(word, amount, size);
        let id = |word: WordId| SoftWord::identity(word, size);
        let carry = |word: WordId, amount: usize| SoftWord::shl(word, amount, size);

        self.push_operation(
            OpKind::Xor3,
            round,
            Role::Sigma0,
            vec![rotr(a1, 2), rotr(a1, 13), rotr(a1, 22)],
            vec![id(sigma0)],
        );
        self.push_operation(
            OpKind::Xor3,
            round,
            Role::Sigma1,
            vec![rotr(e1, 6), rotr(e1, 11), rotr(e1, 25)],
            vec![id(sigma1)],
        );
        self.push_operation(
            OpKind::Maj,
            round,
            Role::Maj,
            vec![id(a1), id(a2), id(a3)],
            vec![id(maj)],
        );
        self.push_operation(
            OpKind::Ch,
            round,
            Role::Ch,
            vec![id(e1), id(e2), id(e3)],
            vec![id(ch)],
        );

        if let Some((w2, w7, w15, w16, s0, s1, w_carry, w_carry_two)) = schedule {
            self.push_operation(
                OpKind::Xor3,
                round,
                Role::LowerSigma0,
                vec![rotr(w15, 7), rotr(w15, 18), shr(w15, 3)],
                vec![id(s0)],
            );
            self.push_operation(
                OpKind::Xor3,
                round,
                Role::LowerSigma1,
                vec![rotr(w2, 17), rotr(w2, 19), shr(w2, 10)],
                vec![id(s1)],
            );
            self.push_operation(
                OpKind::Add(6),
                round,
                Role::W,
                vec![
                    id(s1),
                    id(w7),
                    id(s0),
                    id(w16),
                    carry(w_carry, 1),
                    carry(w_carry_two, 2),
                ],
                vec![id(w_carry_two), id(w_carry), id(w)],
            );
            self.push_sum(SumKind::W, round, vec![s1, w7, s0, w16], w);
        }

        self.push_operation(
            OpKind::Add(7),
            round,
            Role::T,
            vec![
                id(e4),
                id(sigma1),
                id(ch),
                id(k),
                id(w),
                carry(t_carry, 1),
                carry(t_carry_two, 2),
            ],
            vec![id(t_carry_two), id(t_carry), id(t)],
        );
        self.push_sum(SumKind::T, round, vec![e4, sigma1, ch, k, w], t);

        self.push_operation(
            OpKind::Add(3),
            round,
            Role::E,
            vec![id(a4), id(t), carry(e_carry, 1)],
            vec![id(e_carry), id(e)],
        );
        self.push_sum(SumKind::E, round, vec![a4, t], e);

        self.push_operation(
            OpKind::Add(5),
            round,
            Role::A,
            vec![
                id(t),
                id(sigma0),
                id(maj),
                carry(a_carry, 1),
                carry(a_carry_two, 2),
            ],
            vec![id(a_carry_two), id(a_carry), id(a)],
        );
        self.push_sum(SumKind::A, round, vec![t, sigma0, maj], a);
    }

    /// Records, for each tracked atom, the columns of operations and the sum equations which read the bit of the atom.
    fn register_consumers(&mut self) {
        let slots = self.encoding.slots();

        for (op_id, operation) in self.operations.iter().enumerate() {
            for col in 0..self.word_size {
                for bit in operation
                    .input_bits(col)
                    .into_iter()
                    .chain(operation.output_bits(col))
                {
                    if bit.is_zero() {
                        continue;
                    }
                    for atom in &self.words[bit.word].bits[bit.col].atoms[..slots] {
                        if let Some(info) = self.var_index.get_mut(*atom) {
                            if !info.consumers.contains(&(op_id, col)) {
                                info.consumers.push((op_id, col));
                            }
                        }
                    }
                }
            }
        }

        for (sum_id, sum) in self.sums.iter().enumerate() {
            for word in sum.words() {
                for bit in &self.words[word].bits {
                    for atom in &bit.atoms[..slots] {
                        if let Some(info) = self.var_index.get_mut(*atom) {
                            if !info.sums.contains(&sum_id) {
                                info.sums.push(sum_id);
                            }
                        }
                    }
                }
            }
        }
    }
}

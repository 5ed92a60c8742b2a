/*!
The arena holding the topology of a propagator.

Words, steps, operations, and sum equations are each stored in a vector and referred to by index, so views and reverse indicies never hold a reference into the arena.

The [zero word](ZERO_WORD) is always the first word, and each bit of the zero word is `0` regardless of any valuation.
*/

use std::collections::HashMap;

use crate::{
    db::var_info::VarIndex,
    structures::{
        atom::{Atom, NO_ATOM},
        encoding::Encoding,
        gc::Gc,
        operation::{Operation, SumEquation},
        step::{Role, Step},
        word::{BitRef, Word, WordId, ZERO_WORD},
    },
};

/// The first round of a topology, holding only the initial registers.
pub const FIRST_ROUND: i32 = -4;

/// The largest supported number of rounds.
pub const ORDER_MAX: usize = 64;

#[derive(Clone, Debug)]
pub struct State {
    pub encoding: Encoding,
    pub word_size: usize,

    /// The number of rounds, set once the topology is built.
    pub order: Option<usize>,

    pub words: Vec<Word>,

    /// The steps of each round, with the step of round *i* at index *i* + 4.
    pub steps: Vec<Step>,

    pub operations: Vec<Operation>,
    pub sums: Vec<SumEquation>,
    pub var_index: VarIndex,

    /// The atoms of the zero sentinel.
    pub zero_atoms: Option<[Atom; 4]>,

    /// Words mentioned through configuration, by role and round.
    pub(crate) configured: HashMap<(Role, i32), WordId>,
}

impl State {
    pub fn new(encoding: Encoding, word_size: usize) -> Self {
        let mut zero = Word::new(Role::Zero, 0, word_size);
        for bit in &mut zero.bits {
            bit.gc = Gc::ZERO;
        }
        State {
            encoding,
            word_size,
            order: None,
            words: vec![zero],
            steps: Vec::default(),
            operations: Vec::default(),
            sums: Vec::default(),
            var_index: VarIndex::default(),
            zero_atoms: None,
            configured: HashMap::default(),
        }
    }

    /// Whether the atom is an atom of the zero sentinel.
    pub fn is_zero_atom(&self, atom: Atom) -> bool {
        self.zero_atoms
            .is_some_and(|atoms| atoms.iter().any(|zero| *zero != NO_ATOM && *zero == atom))
    }

    pub fn is_built(&self) -> bool {
        self.order.is_some()
    }

    pub fn word(&self, id: WordId) -> &Word {
        &self.words[id]
    }

    /// The atoms of the slots of a bit, and so an empty slice for bits of the zero word.
    pub fn atoms(&self, bit: BitRef) -> &[Atom] {
        match bit.is_zero() {
            true => &[],
            false => &self.words[bit.word].bits[bit.col].atoms[..self.encoding.slots()],
        }
    }

    /// The tracked atoms of a bit.
    pub fn tracked_atoms(&self, bit: BitRef) -> impl Iterator<Item = Atom> + '_ {
        self.atoms(bit)
            .iter()
            .copied()
            .filter(|atom| *atom != NO_ATOM)
    }

    /// The condition of a bit, as of the last refresh.
    pub fn gc(&self, bit: BitRef) -> Gc {
        self.words[bit.word].bits[bit.col].gc
    }

    /// Sets the condition of a bit.
    ///
    /// # Soundness
    /// The condition of a bit should only ever be the refresh of the valuation of its atoms.
    pub fn set_gc(&mut self, bit: BitRef, gc: Gc) {
        if bit.word == ZERO_WORD {
            panic!("! Attempt to write {gc} to the zero word");
        }
        self.words[bit.word].bits[bit.col].gc = gc;
    }

    /// The conditions of a collection of bits.
    pub fn gcs(&self, bits: &[BitRef]) -> Vec<Gc> {
        bits.iter().map(|bit| self.gc(*bit)).collect()
    }

    /// The conditions of a word, least significant bit first.
    pub fn word_gcs(&self, id: WordId) -> Vec<Gc> {
        self.words[id].bits.iter().map(|bit| bit.gc).collect()
    }

    pub fn step(&self, round: i32) -> Option<&Step> {
        let index = round.checked_sub(FIRST_ROUND)?;
        self.steps.get(usize::try_from(index).ok()?)
    }

    /// The word of the given role and round.
    pub fn word_at(&self, role: Role, round: i32) -> Option<WordId> {
        match self.step(round) {
            Some(step) => step.word(role),
            None => self.configured.get(&(role, round)).copied(),
        }
    }

    /// Every bit of a word, least significant first.
    pub fn word_bits(&self, id: WordId) -> impl Iterator<Item = BitRef> {
        (0..self.words[id].bits.len()).map(move |col| BitRef { word: id, col })
    }
}

#[cfg(test)]
mod state_tests {
    use super::*;

    #[test]
    fn zero_word_is_zero() {
        let state = State::new(Encoding::OneBit, 8);
        for col in 0..8 {
            let bit = BitRef {
                word: ZERO_WORD,
                col,
            };
            assert_eq!(state.gc(bit), Gc::ZERO);
            assert!(state.atoms(bit).is_empty());
        }
    }

    #[test]
    fn steps_before_build() {
        let state = State::new(Encoding::Li2024, 4);
        assert!(state.step(-4).is_none());
        assert!(state.word_at(Role::A, 0).is_none());
        assert!(!state.is_built());
    }
}

/*!
Decisions, supplied to the host when nothing else is pending.

Decisions are made in stages, and the first candidate found is taken.

1. Message words W, from the last round back to round 0, each from the most significant bit.
   - The first bit at `?` is decided to have no difference, i.e. `-`.
   - The first bit at `x` is decided to be `u` or `n`, at random.
2. As with stage 1, though over registers A and then E, for the last four rounds.
3. Some atom of a live two-bit equation whose bit has an unknown difference, with a random polarity.

In each case the decision is the first unvalued literal forced by the chosen condition.
A bit whose chosen condition forces no unvalued literal is passed over.
*/

use crate::{
    context::GenericPropagator,
    db::state::FIRST_ROUND,
    misc::log::targets::{self},
    structures::{
        gc::Gc,
        literal::{CLiteral, Literal},
        step::Role,
        word::{BitRef, WordId},
    },
};

impl<R: rand::Rng + std::default::Default> GenericPropagator<R> {
    /// A decision literal, if some stage finds a candidate.
    pub fn make_decision(&mut self) -> Option<CLiteral> {
        let order = self.state.order? as i32;

        let message = (0..order)
            .rev()
            .filter_map(|round| self.state.word_at(Role::W, round))
            .collect::<Vec<_>>();
        if let Some(decision) = self.decide_on_words(&message) {
            log::trace!(target: targets::BRANCHING, "Message decision {decision}");
            return Some(decision);
        }

        let first = std::cmp::max(order - 4, FIRST_ROUND);
        let registers = [Role::A, Role::E]
            .into_iter()
            .flat_map(|role| (first..order).rev().map(move |round| (role, round)))
            .filter_map(|(role, round)| self.state.word_at(role, round))
            .collect::<Vec<_>>();
        if let Some(decision) = self.decide_on_words(&registers) {
            log::trace!(target: targets::BRANCHING, "Register decision {decision}");
            return Some(decision);
        }

        if let Some(decision) = self.decide_on_equations() {
            log::trace!(target: targets::BRANCHING, "Equation decision {decision}");
            return Some(decision);
        }

        None
    }

    /// The first unvalued literal forced by `condition` on the atoms of `bit`.
    fn first_unvalued(&self, bit: BitRef, condition: Gc) -> Option<CLiteral> {
        self.state
            .encoding
            .forcing_literals(self.state.atoms(bit), condition)
            .into_iter()
            .find(|literal| self.assignment.literal_value(*literal).is_none())
    }

    fn decide_on_words(&mut self, words: &[WordId]) -> Option<CLiteral> {
        for word in words {
            for col in (0..self.state.word_size).rev() {
                let bit = BitRef { word: *word, col };
                let condition = match self.state.gc(bit) {
                    Gc::ANY => Gc::DASH,
                    Gc::X => match self.rng.gen_bool(0.5) {
                        true => Gc::U,
                        false => Gc::N,
                    },
                    _ => continue,
                };
                if let Some(literal) = self.first_unvalued(bit, condition) {
                    return Some(literal);
                }
            }
        }
        None
    }

    fn decide_on_equations(&mut self) -> Option<CLiteral> {
        let candidate = self
            .live_equations()
            .iter()
            .flat_map(|equation| [equation.a, equation.b])
            .find(|atom| {
                self.assignment.value_of(*atom).is_none()
                    && self
                        .state
                        .var_index
                        .get(*atom)
                        .is_some_and(|info| self.state.gc(info.bit).difference().is_none())
            })?;
        Some(CLiteral::new(candidate, self.rng.gen_bool(0.5)))
    }
}

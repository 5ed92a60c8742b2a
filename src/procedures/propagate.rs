/*!
The propagation driver.

# Overview

Propagation takes marked columns one at a time, and for each column:
1. Propagates the conditions of the column through the [bitwise](crate::procedures::bitwise) cache.
2. If the column is contradictory, the negation of every literal valued on the bits of the column is a conflict clause.
3. Otherwise, each bit whose condition was refined is examined for unvalued literals the refined condition forces.
4. The two-bit equations of the column are replaced by those found on the propagation.

Propagation stops at the first column which forces some literal, and every literal forced by the column is returned together.

Once no column is marked, and if enabled, marked sum equations are taken in turn through [wordwise](crate::procedures::wordwise) propagation.
Here, only the literals of the first refined bit are returned, scanning words in order and each word from the most significant bit.
The two-bit equations of a sum are replaced by those found on each refining propagation.

# Reasons

The reason for a literal propagated from a column is the literal together with the negation of every literal valued on the bits of the column.
Likewise, for a sum equation, the negation of every literal valued on the bits of the words of the equation.
So, each reason is a clause whose literals (other than the propagated literal) are false on the valuation the propagation was made on.
*/

use crate::{
    config::TwoBitStrategy,
    context::GenericPropagator,
    misc::log::targets::{self},
    procedures::{bitwise, wordwise::{self, Derivation}},
    structures::{
        atom::NO_ATOM,
        equation::Equation,
        gc::Gc,
        literal::{CClause, CLiteral, Literal},
        operation::{OpId, OpKind, SumId},
        word::BitRef,
    },
};

/// The result of propagation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PropagationResult {
    /// Nothing was propagated.
    Nothing,

    /// Literals, each paired with a reason clause whose first literal is the propagated literal.
    Literals(Vec<(CLiteral, CClause)>),

    /// A clause which is false on the current valuation.
    Conflict(CClause),
}

impl<R: rand::Rng + std::default::Default> GenericPropagator<R> {
    /// Propagates marked columns, and then (if enabled) marked sum equations.
    ///
    /// For documentation, see [procedures::propagate](crate::procedures::propagate).
    pub fn propagate(&mut self) -> PropagationResult {
        while let Some((op, col)) = self.marks.next_column() {
            match self.propagate_column(op, col) {
                PropagationResult::Nothing => continue,
                result => return result,
            }
        }

        if !self.config.wordwise.value {
            self.marks.clear_sums();
            return PropagationResult::Nothing;
        }

        while let Some(sum) = self.marks.next_sum() {
            match self.propagate_sum(sum) {
                PropagationResult::Nothing => continue,
                result => return result,
            }
        }
        PropagationResult::Nothing
    }

    /// Every valued literal on the given bits, sorted and without duplicates.
    fn valued_literals(&self, bits: impl Iterator<Item = BitRef>) -> Vec<CLiteral> {
        let mut literals = Vec::default();
        for bit in bits {
            for atom in self.state.tracked_atoms(bit) {
                if let Some(value) = self.assignment.value_of(atom) {
                    literals.push(CLiteral::new(atom, value));
                }
            }
        }
        literals.sort_unstable();
        literals.dedup();
        literals
    }

    /// The slot whose atoms two-bit equations relate, if two-bit equations are kept.
    fn two_bit_slot(&self) -> Option<usize> {
        match self.config.two_bit.value {
            TwoBitStrategy::Off => None,
            _ => self.state.encoding.difference_slot(),
        }
    }

    /// An equation between the difference atoms of two bits, if both bits have distinct difference atoms.
    fn bit_equation(&self, slot: usize, p: BitRef, q: BitRef, value: bool, antecedent: &CClause) -> Option<Equation> {
        let a = self.state.atoms(p).get(slot).copied()?;
        let b = self.state.atoms(q).get(slot).copied()?;
        match a != NO_ATOM && b != NO_ATOM && a != b {
            true => Some(Equation::new(a, b, value, antecedent.clone())),
            false => None,
        }
    }

    /// The unvalued literals forced by refining the condition of `bit` to `fresh`.
    fn forced_literals(&self, bit: BitRef, fresh: Gc) -> Vec<CLiteral> {
        if fresh == self.state.gc(bit) {
            return Vec::default();
        }
        self.state
            .encoding
            .forcing_literals(self.state.atoms(bit), fresh)
            .into_iter()
            .filter(|literal| self.assignment.literal_value(*literal).is_none())
            .collect()
    }

    /// Propagates the column `col` of the operation `op_id`.
    pub fn propagate_column(&mut self, op_id: OpId, col: usize) -> PropagationResult {
        self.counters.columns += 1;

        let operation = &self.state.operations[op_id];
        let kind = operation.kind;
        let input_bits = operation.input_bits(col);
        let output_bits = operation.output_bits(col);

        let inputs = self.state.gcs(&input_bits);
        let outputs = self.state.gcs(&output_bits);
        let outcome = self
            .bit_cache
            .get_or_insert_with((kind, inputs, outputs), |(kind, inputs, outputs)| {
                bitwise::propagate_column(*kind, inputs, outputs)
            });

        let bits = input_bits
            .iter()
            .chain(output_bits.iter())
            .copied()
            .collect::<Vec<_>>();
        let antecedent = self
            .valued_literals(bits.iter().copied())
            .into_iter()
            .map(|literal| literal.negate())
            .collect::<CClause>();

        let Some(outcome) = outcome else {
            if antecedent.is_empty() {
                return PropagationResult::Nothing;
            }
            log::trace!(target: targets::PROPAGATION, "Contradiction at column {col} of {}", self.state.operations[op_id]);
            self.counters.conflicts += 1;
            return PropagationResult::Conflict(antecedent);
        };

        // The highest carry of an addition is not propagated when too few addends are present to produce it.
        let suppressed = match kind {
            OpKind::Add(_) => {
                let effective = input_bits.iter().filter(|bit| !bit.is_zero()).count();
                effective < 1 << (kind.output_count() - 1)
            }
            _ => false,
        };

        let mut literals: Vec<(CLiteral, CClause)> = Vec::default();
        for (position, (bit, fresh)) in bits
            .iter()
            .zip(outcome.inputs.iter().chain(outcome.outputs.iter()))
            .enumerate()
        {
            if suppressed && position == input_bits.len() {
                continue;
            }
            for literal in self.forced_literals(*bit, *fresh) {
                if literals.iter().any(|(propagated, _)| *propagated == literal) {
                    continue;
                }
                let mut reason = vec![literal];
                reason.extend(antecedent.iter().copied());
                literals.push((literal, reason));
            }
        }

        if let Some(slot) = self.two_bit_slot() {
            let equations = outcome
                .relations
                .iter()
                .filter_map(|(p, q, value)| self.bit_equation(slot, bits[*p], bits[*q], *value, &antecedent))
                .collect::<Vec<_>>();
            self.state.operations[op_id].equations[col] = equations;
        }

        match literals.is_empty() {
            true => PropagationResult::Nothing,
            false => {
                log::trace!(target: targets::PROPAGATION, "{} literals from column {col} of {}", literals.len(), self.state.operations[op_id]);
                PropagationResult::Literals(literals)
            }
        }
    }

    /// Propagates the sum equation `sum_id`.
    pub fn propagate_sum(&mut self, sum_id: SumId) -> PropagationResult {
        let sum = &self.state.sums[sum_id];
        let positive = sum
            .positive
            .iter()
            .map(|word| self.state.word_gcs(*word))
            .collect::<Vec<_>>();
        let negative = sum
            .negative
            .iter()
            .map(|word| self.state.word_gcs(*word))
            .collect::<Vec<_>>();
        let key = (sum.kind, positive.iter().chain(negative.iter()).flatten().copied().collect());

        let derivation = self
            .word_cache
            .get_or_insert_with(key, |_| wordwise::propagate_sum(&positive, &negative));

        let words = self.state.sums[sum_id].words().collect::<Vec<_>>();
        let equation_bits = || {
            words
                .iter()
                .flat_map(|word| self.state.word_bits(*word))
                .collect::<Vec<_>>()
        };

        match derivation {
            Derivation::Skipped => PropagationResult::Nothing,

            Derivation::Contradiction => {
                let clause = self
                    .valued_literals(equation_bits().into_iter())
                    .into_iter()
                    .map(|literal| literal.negate())
                    .collect::<CClause>();
                if clause.is_empty() {
                    return PropagationResult::Nothing;
                }
                log::trace!(target: targets::WORDWISE, "Contradiction of sum {sum_id}");
                self.counters.conflicts += 1;
                PropagationResult::Conflict(clause)
            }

            Derivation::Refined {
                words: refined,
                relations,
            } => {
                let antecedent = self
                    .valued_literals(equation_bits().into_iter())
                    .into_iter()
                    .map(|literal| literal.negate())
                    .collect::<CClause>();

                if let Some(slot) = self.two_bit_slot() {
                    let equations = relations
                        .iter()
                        .filter_map(|relation| {
                            let p = BitRef { word: words[relation.first], col: relation.col };
                            let q = BitRef { word: words[relation.second], col: relation.col };
                            self.bit_equation(slot, p, q, relation.value, &antecedent)
                        })
                        .collect::<Vec<_>>();
                    self.state.sums[sum_id].equations = equations;
                }

                for (word, conditions) in words.iter().zip(refined.iter()) {
                    for col in (0..conditions.len()).rev() {
                        let bit = BitRef { word: *word, col };
                        let forced = self.forced_literals(bit, conditions[col]);
                        if forced.is_empty() {
                            continue;
                        }

                        log::trace!(target: targets::WORDWISE, "Sum {sum_id} refines {bit:?} to {}", conditions[col]);
                        self.counters.derivations += 1;
                        return PropagationResult::Literals(
                            forced
                                .into_iter()
                                .map(|literal| {
                                    let mut reason = vec![literal];
                                    reason.extend(antecedent.iter().copied());
                                    (literal, reason)
                                })
                                .collect(),
                        );
                    }
                }
                PropagationResult::Nothing
            }
        }
    }
}

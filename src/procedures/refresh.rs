/*!
Refreshing the conditions of dirty bits.

Assignments only mark bits as dirty.
A soft refresh recomputes the condition of each dirty bit from the valuation of its atoms, and if the fresh condition excludes some pair the stale condition admitted, marks each column of an operation and each sum equation which reads the bit.

Refreshing is the only way new information reaches propagation, and so a refresh precedes every propagation, check, or decision.
*/

use crate::{
    context::GenericPropagator,
    misc::log::targets::{self},
    structures::atom::NO_ATOM,
};

impl<R: rand::Rng + std::default::Default> GenericPropagator<R> {
    /// Recomputes the conditions of dirty bits, and marks the consumers of refined bits.
    pub fn soft_refresh(&mut self) {
        for bit in self.assignment.take_dirty() {
            let values = self
                .state
                .atoms(bit)
                .iter()
                .map(|atom| match *atom {
                    NO_ATOM => None,
                    atom => self.assignment.value_of(atom),
                })
                .collect::<Vec<_>>();
            let fresh = self.state.encoding.refresh(&values);
            let stale = self.state.gc(bit);
            if fresh == stale {
                continue;
            }

            log::trace!(target: targets::REFRESH, "{bit:?} {stale} → {fresh}");
            self.state.set_gc(bit, fresh);

            if stale.is_subset_of(fresh) {
                continue;
            }
            let Some(info) = self
                .state
                .tracked_atoms(bit)
                .next()
                .and_then(|atom| self.state.var_index.get(atom))
            else {
                continue;
            };
            for (op, col) in &info.consumers {
                self.marks.mark_column(*op, *col);
            }
            for sum in &info.sums {
                self.marks.mark_sum(*sum);
            }
        }
    }
}

/*!
Recovery from a backtrack of the host solver.

A backjump to level *l* unassigns every literal recorded on the trail above *l*, in reverse order of assignment, and discards any work in progress.
The conditions of the unassigned bits are refreshed at once, so a later assignment to the same atoms is seen as a refinement.

Reasons are then purged: a reason is kept only while the propagated literal and each literal of the reason remain valued.
Two-bit equations are not purged, as an equation is only ever used after a check that its antecedent remains false.
*/

use crate::{
    context::{GenericPropagator, PropagatorState},
    db::LevelIndex,
    misc::log::targets::{self},
};

impl<R: rand::Rng + std::default::Default> GenericPropagator<R> {
    /// Backjumps to the given target level.
    ///
    /// Passing a target level greater than the current level is safe --- nothing will happen to the trail.
    pub fn backjump(&mut self, target: LevelIndex) {
        log::trace!(target: targets::TRAIL, "Backjump from {} to {}", self.trail.level(), target);

        for literal in self.trail.pop_to(target) {
            self.assignment.unassign(literal, &self.state.var_index);
        }
        self.soft_refresh();

        self.status = PropagatorState::Idle;
        self.reason_stream = None;

        let assignment = &self.assignment;
        let before = self.reasons.len();
        self.reasons.retain(|literal, clause| {
            assignment.literal_value(*literal).is_some()
                && clause
                    .iter()
                    .all(|antecedent| assignment.literal_value(*antecedent).is_some())
        });
        log::trace!(target: targets::TRAIL, "Purged {} reasons", before - self.reasons.len());

        self.counters.backtracks += 1;
    }
}

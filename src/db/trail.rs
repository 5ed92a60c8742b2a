/*!
The trail of assignments, partitioned by decision level.

The trail mirrors the decision levels of the host solver.
A new level is opened on each decision, and a backtrack to level *l* removes every literal recorded above *l*.

Literals fixed at level zero are not recorded on the trail, as they are never unassigned.
*/

use crate::structures::literal::CLiteral;

/// The index of a decision level.
pub type LevelIndex = usize;

#[derive(Clone, Debug, Default)]
pub struct Trail {
    literals: Vec<CLiteral>,
    level_indicies: Vec<usize>,
}

impl Trail {
    /// Stores an assignment at the top level.
    pub fn store_assignment(&mut self, literal: CLiteral) {
        self.literals.push(literal);
    }

    /// Opens a new level.
    pub fn push_level(&mut self) {
        self.level_indicies.push(self.literals.len());
    }

    /// The current level.
    pub fn level(&self) -> LevelIndex {
        self.level_indicies.len()
    }

    /// The assignments made at the (current) top level, in order of assignment.
    pub fn top_level_assignments(&self) -> &[CLiteral] {
        match self.level_indicies.last() {
            Some(&level_start) => &self.literals[level_start..],
            None => &self.literals,
        }
    }

    /// Every recorded assignment, in order of assignment.
    pub fn assignments(&self) -> &[CLiteral] {
        &self.literals
    }

    /// Removes levels above the given level index, returning the literals of those levels in reverse order of assignment.
    ///
    /// # Soundness
    /// Does not clear the *valuation* of any literal.
    pub fn pop_to(&mut self, level: LevelIndex) -> Vec<CLiteral> {
        // level_indicies stores with zero-indexing.
        // So, the first assignment above level l is at literals[level_indicies[l]].
        match self.level_indicies.get(level) {
            Some(&level_start) => {
                self.level_indicies.truncate(level);
                let mut removed = self.literals.split_off(level_start);
                removed.reverse();
                removed
            }
            None => Vec::default(),
        }
    }
}

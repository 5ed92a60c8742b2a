/*!
Marks on the columns of operations and on sum equations, awaiting propagation.

A column is marked when the condition of some bit of the column is refined, and likewise a sum equation is marked when the condition of some bit of one of its words is refined.
Marks are taken in the order made, except that the most recently marked column is taken first.
*/

use std::collections::{HashSet, VecDeque};

use crate::structures::operation::{OpId, SumId};

#[derive(Clone, Debug, Default)]
pub struct Marks {
    columns: VecDeque<(OpId, usize)>,
    marked_columns: HashSet<(OpId, usize)>,

    sums: VecDeque<SumId>,
    marked_sums: HashSet<SumId>,

    /// The most recently marked column.
    last_marked: Option<(OpId, usize)>,
}

impl Marks {
    pub fn mark_column(&mut self, op: OpId, col: usize) {
        if self.marked_columns.insert((op, col)) {
            self.columns.push_back((op, col));
        }
        self.last_marked = Some((op, col));
    }

    pub fn mark_sum(&mut self, sum: SumId) {
        if self.marked_sums.insert(sum) {
            self.sums.push_back(sum);
        }
    }

    /// Takes a marked column, if any.
    pub fn next_column(&mut self) -> Option<(OpId, usize)> {
        if let Some(last) = self.last_marked.take() {
            if self.marked_columns.remove(&last) {
                return Some(last);
            }
        }
        while let Some(column) = self.columns.pop_front() {
            if self.marked_columns.remove(&column) {
                return Some(column);
            }
        }
        None
    }

    /// Takes a marked sum equation, if any.
    pub fn next_sum(&mut self) -> Option<SumId> {
        let sum = self.sums.pop_front()?;
        self.marked_sums.remove(&sum);
        Some(sum)
    }

    pub fn has_columns(&self) -> bool {
        !self.marked_columns.is_empty()
    }

    pub fn has_sums(&self) -> bool {
        !self.marked_sums.is_empty()
    }

    pub fn clear_sums(&mut self) {
        self.sums.clear();
        self.marked_sums.clear();
    }
}

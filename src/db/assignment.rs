/*!
A partial assignment to the tracked atoms, together with the bits made dirty by changes to the assignment.

The canonical representation of the valuation is a vector of optional booleans indexed by atom, where index 0 (the absent atom) is never valued.

Assigning or unassigning a tracked atom marks the bit of the atom as dirty, and nothing else.
The conditions of dirty bits are recomputed in bulk by a [refresh](crate::procedures::refresh).

Atoms fixed at level zero are never unassigned, as the host solver only unassigns those atoms when restarting from scratch.

```rust
# use otter_sha::db::{assignment::PartialAssignment, var_info::VarIndex};
let index = VarIndex::default();
let mut assignment = PartialAssignment::new(8);
// Atoms which are not tracked are ignored.
assert!(!assignment.assign(3, &index));
assert_eq!(assignment.value_of(3), None);
```
*/

use std::collections::HashSet;

use crate::{
    db::var_info::VarIndex,
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
        word::BitRef,
    },
};

/// A partial valuation of atoms, with a record of dirty bits.
#[derive(Clone, Debug)]
pub struct PartialAssignment {
    values: Vec<Option<bool>>,
    dirty: Vec<BitRef>,
    dirty_set: HashSet<BitRef>,
}

impl PartialAssignment {
    /// An empty assignment, with room for each atom up to and including `max_atom`.
    pub fn new(max_atom: Atom) -> Self {
        PartialAssignment {
            values: vec![None; max_atom as usize + 1],
            dirty: Vec::default(),
            dirty_set: HashSet::default(),
        }
    }

    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.values.get(atom as usize).copied().flatten()
    }

    /// The value of a literal: true if the atom of the literal is valued with the polarity of the literal.
    pub fn literal_value(&self, literal: CLiteral) -> Option<bool> {
        self.value_of(literal.atom())
            .map(|value| value == literal.polarity())
    }

    /// The valuation, indexed by atom.
    pub fn valuation(&self) -> &[Option<bool>] {
        &self.values
    }

    fn mark_dirty(&mut self, bit: BitRef) {
        if self.dirty_set.insert(bit) {
            self.dirty.push(bit);
        }
    }

    /// Values the atom of `literal` with the polarity of `literal`, and marks the bit of the atom as dirty.
    /// Returns true if the atom is tracked, and false otherwise.
    pub fn assign(&mut self, literal: CLiteral, index: &VarIndex) -> bool {
        let Some(info) = index.get(literal.atom()) else {
            return false;
        };
        let bit = info.bit;
        self.values[literal.atom() as usize] = Some(literal.polarity());
        self.mark_dirty(bit);
        true
    }

    /// Clears the value of the atom of `literal`, unless the atom is fixed.
    /// Returns true if some value was cleared.
    pub fn unassign(&mut self, literal: CLiteral, index: &VarIndex) -> bool {
        let Some(info) = index.get(literal.atom()) else {
            return false;
        };
        if info.fixed {
            return false;
        }
        let bit = info.bit;
        self.values[literal.atom() as usize] = None;
        self.mark_dirty(bit);
        true
    }

    /// Takes the dirty bits, in the order they were first made dirty.
    pub fn take_dirty(&mut self) -> Vec<BitRef> {
        self.dirty_set.clear();
        std::mem::take(&mut self.dirty)
    }

    pub fn has_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }
}

/// Assignments are equal when their valuations are equal, regardless of dirty bits.
impl PartialEq for PartialAssignment {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl Eq for PartialAssignment {}

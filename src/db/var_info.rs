/*!
A reverse index from atoms to the bits they encode.

Each tracked atom has a [VarInfo], giving the bit the atom is a slot of, the role and round of the word of the bit, and the operations (by column) and sum equations which read the bit.
The index is built once, with the topology, and afterwards only the `fixed` flag of an atom is revised.
*/

use crate::structures::{
    atom::Atom,
    operation::{OpId, SumId},
    step::Role,
    word::BitRef,
};

/// Information about a tracked atom.
#[derive(Clone, Debug)]
pub struct VarInfo {
    /// The bit the atom is a slot of.
    pub bit: BitRef,

    /// The slot of the atom within the bit.
    pub slot: usize,

    pub role: Role,
    pub round: i32,

    /// The operations which read or write the bit, paired with the column of the operation the bit is read at.
    pub consumers: Vec<(OpId, usize)>,

    /// The sum equations which contain the word of the bit.
    pub sums: Vec<SumId>,

    /// Whether the atom was assigned at level zero, and so is never unassigned.
    pub fixed: bool,
}

/// Information about each tracked atom, indexed by atom.
#[derive(Clone, Debug, Default)]
pub struct VarIndex {
    infos: Vec<Option<VarInfo>>,
}

impl VarIndex {
    pub fn get(&self, atom: Atom) -> Option<&VarInfo> {
        self.infos.get(atom as usize).and_then(|info| info.as_ref())
    }

    pub fn get_mut(&mut self, atom: Atom) -> Option<&mut VarInfo> {
        self.infos
            .get_mut(atom as usize)
            .and_then(|info| info.as_mut())
    }

    /// Records information about an atom, returning false if the atom was already recorded.
    pub fn insert(&mut self, atom: Atom, info: VarInfo) -> bool {
        let index = atom as usize;
        if self.infos.len() <= index {
            self.infos.resize(index + 1, None);
        }
        match self.infos[index] {
            Some(_) => false,
            None => {
                self.infos[index] = Some(info);
                true
            }
        }
    }

    /// The largest tracked atom, or zero if no atom is tracked.
    pub fn max_atom(&self) -> Atom {
        self.infos.len().saturating_sub(1) as Atom
    }

    pub fn is_fixed(&self, atom: Atom) -> bool {
        self.get(atom).is_some_and(|info| info.fixed)
    }

    /// An iterator over tracked atoms and their information.
    pub fn iter(&self) -> impl Iterator<Item = (Atom, &VarInfo)> {
        self.infos
            .iter()
            .enumerate()
            .filter_map(|(atom, info)| info.as_ref().map(|info| (atom as Atom, info)))
    }
}

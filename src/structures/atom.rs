/*!
(The representation of) an atom, aka. a 'variable' of the host solver.

Atoms are the positive integers used by the host solver to name boolean variables.
Only those atoms mentioned when [building](crate::builder) a propagator are tracked, and all other atoms are ignored.

The atom `0` is never used by a solver, and so stands for the absence of an atom.
For example, a bit of a carry word which could never be set has no atoms, and every slot of the bit holds [NO_ATOM].
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The absence of an atom.
pub const NO_ATOM: Atom = 0;

/// The maximum instance of an atom.
pub const ATOM_MAX: Atom = i32::MAX.unsigned_abs();

//! Procedures of a propagator.
//!
//! Propagation ([bitwise] and [wordwise]) and the consistency of [two_bit] equations are written as free functions over conditions, with methods on a propagator to apply them to the current state.
//! Otherwise, procedures are methods accessed via a propagator, and primarily placed here for documentation.

pub mod backjump;
pub mod bitwise;
pub mod decision;
pub mod propagate;
pub mod two_bit;
pub mod wordwise;

#[doc(hidden)]
pub mod refresh;

//! Generic structures, not specific to differential characteristics.

pub mod gf2;
pub mod random;

//! Abstract structures of a differential characteristic, and their representation.
//!
//! - [Atoms](atom) and [literals](literal), as exchanged with a host solver.
//! - [Generalized conditions](gc), the symbols of a characteristic, and [encodings](encoding) of a condition as atoms.
//! - [Words](word), [steps](step), and [operations](operation), the topology of the step function.
//! - [Two-bit equations](equation), relations between the differences of bits.

pub mod atom;
pub mod encoding;
pub mod equation;
pub mod gc;
pub mod literal;
pub mod operation;
pub mod step;
pub mod word;

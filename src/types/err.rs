//! Error types used in the library.
//!
//! - Errors are only returned while a propagator is being configured, or when a rule database is read.
//!   Once the topology is built, every callback is total: an absent result (no propagation, no clause, no decision) is an ordinary outcome and not an error.
//! - Violations of an internal invariant (e.g. a reason requested for a literal which was never propagated) are not represented here.
//!   Those panic, as continuing would make the search unsound.
//!
//! Names of the error enums --- for the most part --- overlap with the procedures which raise them.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::structures::atom::Atom;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Build(BuildError),
    Parse(ParseError),

    /// A callback was made before the topology was built.
    NotBuilt,
}

/// Noted errors when building the topology of a propagator from (name, identifier) pairs.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BuildError {
    /// A name did not follow `<role>_<round>_<col>` (or `<role>_<round>_<col>_<f|g>`).
    MalformedName(String),

    /// The role of a name is not known.
    UnknownRole(String),

    /// The round of a name falls outside of `-4..order`.
    RoundOutOfRange(i32),

    /// The column of a name is not below the word size.
    ColumnOutOfRange(usize),

    /// Identifiers are positive, and fit within an atom.
    InvalidIdentifier(i64),

    /// The same atom was given to two positions.
    DuplicateAtom(Atom),

    /// The order is outside of `1..=64`.
    InvalidOrder(i64),

    /// Some entry was given after the order, and so after the topology was built.
    AlreadyBuilt,

    /// A word required by the step function was never mentioned.
    MissingWord { role: &'static str, round: i32 },

    /// No identifiers were given for the zero sentinel.
    MissingZero,
}

impl From<BuildError> for ErrorKind {
    fn from(e: BuildError) -> Self {
        ErrorKind::Build(e)
    }
}

/// Errors during parsing of a rule database.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Some unspecific problem at a specific line.
    Line(usize),

    /// An operation name which is not one of `xor3`, `maj`, `ch`, or `add`.
    UnknownOperation(usize),

    /// A pattern containing a character outside of the alphabet, or of the wrong length.
    Pattern(usize),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

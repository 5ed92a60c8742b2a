//! Types used throughout the library which do not fit naturally with any particular structure.

pub mod err;

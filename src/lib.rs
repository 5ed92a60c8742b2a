//! An external propagator for CDCL solvers, which searches for differential characteristics of SHA-256.
//!
//! otter_sha tracks a *generalized condition* for each bit of two parallel instances of the SHA-256 compression function.
//! A condition is a set of the pairs (*x*, *x'*) a bit may take across the two instances, written with one character (see [gc](crate::structures::gc)).
//! For example, `-` states the instances agree at the bit, and `u` states the bit is 1 in the first instance and 0 in the second.
//!
//! The bits themselves are encoded as boolean variables of a host solver, which also holds a CNF encoding of the compression function.
//! Through the [external propagator interface](crate::ipasir_up) of the host the propagator observes assignments to those variables, and in turn supplies propagated literals with reasons, conflict clauses, and decisions.
//!
//! # Orientation
//!
//! The library is design around the core structure of a [propagator](crate::context).
//!
//! Propagators are built with a configuration, and are then given a topology as a sequence of (name, identifier) pairs, which name the bit (and slot) each variable of the host encodes.
//! The topology is built once the number of rounds is given (see [builder]).
//!
//! Internally, and at a high-level:
//! - The topology (words, operations, and sum equations) and the condition of each bit is stored in a [state](crate::db::state).
//! - Assignments are stored in a [partial assignment](crate::db::assignment), which marks bits as dirty.
//! - A [refresh](crate::procedures::refresh) recomputes the conditions of dirty bits, and marks the operations which read refined bits.
//! - [Propagation](crate::procedures::propagate) examines marked operations.
//!
//! Useful starting points, then, may be:
//! - The [callback interface](crate::ipasir_up) to inspect the dynamics of a search.
//! - The [bitwise](crate::procedures::bitwise) and [wordwise](crate::procedures::wordwise) propagation procedures, which are free of any state.
//! - The [structures] to familiarise yourself with conditions, encodings, and the step function.
//! - The [configuration](crate::config) to see what features are supported.
//!
//! # Examples
//!
//! + Propagate through one column of an addition.
//!
//! ```rust
//! # use otter_sha::procedures::bitwise::propagate;
//! # use otter_sha::structures::operation::OpKind;
//! let (inputs, outputs) = propagate(OpKind::Add(7), "110?100", "1??").unwrap();
//! assert_eq!(inputs, "1101100");
//! assert_eq!(outputs, "100");
//! ```
//!
//! + Derive words from a modular difference.
//!
//! ```rust
//! # use otter_sha::procedures::wordwise::derive_words;
//! let derived = derive_words(&["--xxxx-xx--x", "--B--D-BBBB-"], 1147).unwrap();
//! assert_eq!(derived, vec!["--uunu-nx--x", "--u--n-B-BB-"]);
//! ```
//!
//! # Logs
//!
//! To help diagnose issues (somewhat) detailed calls to [log!](log) are made, and a variety of targets are defined in order to help narrow output to relevant parts of the library.
//! As logging is only built on request, and further can be requested by level, logs are verbose.
//!
//! The targets are lists in [misc::log].

#![allow(mixed_script_confusables)]
#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::derivable_impls)]

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod generic;

pub mod db;

pub mod ipasir_up;
pub mod misc;

//! The external propagator interface of a host solver, in the style of IPASIR-UP.
//!
//! The host drives a propagator through the methods of [ExternalPropagator].
//! Notifications (`notify_*`) tell the propagator of changes to the valuation of observed atoms, and callbacks (`cb_*`) ask the propagator for work.
//!
//! Information about the interface may be found at: <https://github.com/arminbiere/cadical>, in `ipasir_up.h`.
//!
//! # Returning work
//!
//! Each callback returns at most one literal, with `0` signalling nothing (more) is available.
//! So, a clause is given to the host one literal at a time, ending with `0`, and the host calls again for each literal.
//!
//! Work found by a propagator is held as a [PropagatorState](crate::context::PropagatorState) until the host takes all of it, or a backtrack discards it.
//! For example, if propagation finds a contradiction then [cb_propagate](ExternalPropagator::cb_propagate) returns `0`, and the clause of the contradiction waits for [cb_has_external_clause](ExternalPropagator::cb_has_external_clause).
//!
//! # Reasons
//!
//! The reason for a propagated literal is a clause beginning with the literal, with every other literal false when the literal was propagated.
//! Reasons are kept until a backtrack unassigns the propagated literal or some literal of the reason.
//!
//! # Example
//!
//! ```rust
//! # use otter_sha::context::Propagator;
//! # use otter_sha::config::Config;
//! # use otter_sha::ipasir_up::ExternalPropagator;
//! let mut propagator = Propagator::from_config(Config::default());
//! // Nothing happens until a topology is built.
//! propagator.notify_assignment(7, false);
//! assert_eq!(propagator.cb_propagate(), 0);
//! assert_eq!(propagator.cb_decide(), 0);
//! assert!(!propagator.cb_has_external_clause());
//! ```

mod external;

use crate::{db::LevelIndex, structures::literal::CLiteral};

/// The methods called by a host solver on an external propagator.
pub trait ExternalPropagator {
    /// Notes the assignment of `literal`, where `is_fixed` indicates the assignment holds at level zero.
    fn notify_assignment(&mut self, literal: CLiteral, is_fixed: bool);

    /// Notes a new decision level.
    fn notify_new_decision_level(&mut self);

    /// Notes a backtrack to `level`, which unassigns every literal assigned above `level`.
    fn notify_backtrack(&mut self, level: LevelIndex);

    /// Checks a complete assignment found by the host, returning true to accept the assignment.
    fn cb_check_found_model(&mut self, model: &[CLiteral]) -> bool;

    /// A decision for the host to make, or `0`.
    fn cb_decide(&mut self) -> CLiteral;

    /// A literal for the host to propagate, or `0`.
    fn cb_propagate(&mut self) -> CLiteral;

    /// The next literal of the reason for `propagated`, or `0` once the reason is given.
    fn cb_add_reason_clause_lit(&mut self, propagated: CLiteral) -> CLiteral;

    /// Whether a clause is available for the host.
    fn cb_has_external_clause(&mut self) -> bool;

    /// The next literal of the available clause, or `0` once the clause is given.
    fn cb_add_external_clause_lit(&mut self) -> CLiteral;
}

/*!
The propagator --- which is configured with a topology, and then driven by the callbacks of a host solver.

Strictly, a [GenericPropagator] and a [Propagator].

The generic propagator is generic over the source of randomness used when branching.
[from_config](Propagator::from_config) is implemented for a propagator rather than a generic propagator to avoid requiring a source of randomness to be supplied alongside a config.

# Example
```rust
# use otter_sha::context::Propagator;
# use otter_sha::config::Config;
# use otter_sha::ipasir_up::ExternalPropagator;
let mut config = Config::default();
config.word_size.value = 4;
let mut propagator = Propagator::from_config(config);

// Identifiers for the zero sentinel, and the first bit of A in round -1.
assert!(propagator.configure("zero", 1).is_ok());
assert!(propagator.configure("A_-1_0", 4).is_ok());

// Nothing is known before the order is given.
assert_eq!(propagator.cb_propagate(), 0);
```

# States

Between callbacks a propagator holds at most one piece of work for the host, as a [PropagatorState].
A reason clause being streamed to the host is held separately, as the host may ask for a reason at any point.
*/

mod counters;
pub use counters::Counters;
mod generic;
pub use generic::GenericPropagator;
mod specific;
pub use specific::Propagator;

use std::collections::VecDeque;

use crate::structures::literal::{CClause, CLiteral};

/// The state of a propagator, with any work in progress.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PropagatorState {
    /// No work is in progress.
    Idle,

    /// Literals propagated together, to be given to the host one at a time.
    HasPropagation(VecDeque<CLiteral>),

    /// A clause to be given to the host, with the index of the next literal to give.
    HasExternalClause { clause: CClause, index: usize },

    /// A decision given to the host, and not yet followed by a new decision level.
    HasDecision(CLiteral),
}

impl std::fmt::Display for PropagatorState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::HasPropagation(_) => write!(f, "HasPropagation"),
            Self::HasExternalClause { .. } => write!(f, "HasExternalClause"),
            Self::HasDecision(_) => write!(f, "HasDecision"),
        }
    }
}

/// A reason clause being given to the host, one literal at a time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReasonStream {
    /// The literal the reason is for.
    pub literal: CLiteral,
    pub clause: CClause,
    pub index: usize,
}

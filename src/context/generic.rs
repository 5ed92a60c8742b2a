use std::collections::HashMap;

use crate::{
    config::Config,
    db::{
        assignment::PartialAssignment,
        cache::{BitCache, WordCache},
        marks::Marks,
        state::State,
        trail::Trail,
    },
    structures::{
        atom::Atom,
        gc::gc_string,
        literal::{CClause, CLiteral},
        step::Role,
    },
    types::err::ErrorKind,
};

use super::{Counters, PropagatorState, ReasonStream};

/// A generic propagator, parameratised to a source of randomness.
///
/// Requires a source of [rng](rand::Rng) which (also) implements [Default].
///
/// # Example
///
/// ```rust
/// # use otter_sha::context::GenericPropagator;
/// # use otter_sha::generic::random::MinimalPCG32;
/// # use otter_sha::config::Config;
/// let propagator = GenericPropagator::<MinimalPCG32>::with_rng(Config::default(), MinimalPCG32::default());
/// assert!(!propagator.is_built());
/// ```
pub struct GenericPropagator<R: rand::Rng + std::default::Default> {
    /// The configuration of a propagator.
    pub config: Config,

    /// Counters related to a propagator.
    pub counters: Counters,

    /// The topology, and the conditions of each bit.
    /// See [db::state](crate::db::state) for details.
    pub state: State,

    /// The valuation of tracked atoms.
    pub assignment: PartialAssignment,

    /// The trail of assignments, by decision level.
    pub trail: Trail,

    /// Cached results of bitwise propagation.
    pub bit_cache: BitCache,

    /// Cached results of wordwise propagation.
    pub word_cache: WordCache,

    /// Reason clauses of propagated literals, with the propagated literal first.
    pub reasons: HashMap<CLiteral, CClause>,

    /// Columns and sum equations awaiting propagation.
    pub marks: Marks,

    /// The work in progress.
    pub status: PropagatorState,

    /// A reason clause in the middle of being given to the host.
    pub reason_stream: Option<ReasonStream>,

    /// A count of queries for an external clause, used to schedule checks of two-bit equations.
    pub(crate) clause_queries: usize,

    /// The source of rng.
    pub rng: R,
}

impl<R: rand::Rng + std::default::Default> GenericPropagator<R> {
    /// A propagator with the given configuration and source of rng.
    pub fn with_rng(config: Config, rng: R) -> Self {
        Self {
            state: State::new(config.encoding.value, config.word_size.value),
            assignment: PartialAssignment::new(0),
            trail: Trail::default(),

            bit_cache: BitCache::new(config.cache_limit.value),
            word_cache: WordCache::new(config.cache_limit.value),

            config,
            counters: Counters::default(),

            reasons: HashMap::default(),
            marks: Marks::default(),
            status: PropagatorState::Idle,
            reason_stream: None,
            clause_queries: 0,

            rng,
        }
    }

    /// Whether the topology of the propagator has been built.
    pub fn is_built(&self) -> bool {
        self.state.is_built()
    }

    /// The value of an atom, if the atom is tracked and valued.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.assignment.value_of(atom)
    }

    /// The conditions of a word, most significant bit first, as of the last refresh.
    ///
    /// Returns `Ok(None)` if the topology has no word with the given role and round.
    pub fn word_string(&self, role: Role, round: i32) -> Result<Option<String>, ErrorKind> {
        if !self.is_built() {
            return Err(ErrorKind::NotBuilt);
        }
        Ok(self
            .state
            .word_at(role, round)
            .map(|word| gc_string(&self.state.word(word).gc_string())))
    }
}

use crate::{config::Config, generic::random::MinimalPCG32};

use rand::SeedableRng;

use super::GenericPropagator;

/// A propagator which uses [MinimalPCG32] as a source of randomness.
pub type Propagator = GenericPropagator<MinimalPCG32>;

impl Propagator {
    /// Creates a propagator from some given configuration, with rng seeded from the configuration.
    pub fn from_config(config: Config) -> Self {
        let rng = MinimalPCG32::from_seed(config.seed.value.to_le_bytes());
        Self::with_rng(config, rng)
    }
}

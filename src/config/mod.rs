/*!
Configuration of a propagator.

All configuration for a propagator is contained within a [Config], and the configuration is fixed once the topology of the propagator is [built](crate::builder).

```rust
# use otter_sha::config::{Config, TwoBitStrategy};
# use otter_sha::structures::encoding::Encoding;
let mut config = Config::default();
config.encoding.value = Encoding::Li2024;
assert!(config.word_size.set(16));
assert!(!config.word_size.set(33));
config.two_bit.value = TwoBitStrategy::Graph;
```
*/

mod config_option;
pub use config_option::ConfigOption;

mod two_bit;
pub use two_bit::TwoBitStrategy;

use crate::structures::encoding::Encoding;

/// The largest supported word size, in bits.
pub const WORD_SIZE_MAX: usize = 32;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// How the boolean variables of a bit are read as a generalized condition.
    pub encoding: ConfigOption<Encoding>,

    /// The number of bits in a word.
    /// SHA-256 uses 32, while smaller words are useful for toy instances.
    pub word_size: ConfigOption<usize>,

    /// Derive bits from the modular differences of addition equations, after bitwise propagation is exhausted.
    pub wordwise: ConfigOption<bool>,

    /// Which method, if any, to use to check two-bit equations.
    pub two_bit: ConfigOption<TwoBitStrategy>,

    /// Check two-bit equations on every *n*th query for an external clause.
    pub two_bit_interval: ConfigOption<usize>,

    /// Supply decisions to the solver.
    pub branching: ConfigOption<bool>,

    /// The number of entries a propagation cache may hold before it is cleared.
    pub cache_limit: ConfigOption<usize>,

    /// The seed for the source of rng used when branching.
    pub seed: ConfigOption<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            encoding: ConfigOption {
                name: "encoding",
                min: Encoding::MIN,
                max: Encoding::MAX,
                value: Encoding::OneBit,
            },

            word_size: ConfigOption {
                name: "word_size",
                min: 1,
                max: WORD_SIZE_MAX,
                value: WORD_SIZE_MAX,
            },

            wordwise: ConfigOption {
                name: "wordwise",
                min: false,
                max: true,
                value: true,
            },

            two_bit: ConfigOption {
                name: "two_bit",
                min: TwoBitStrategy::MIN,
                max: TwoBitStrategy::MAX,
                value: TwoBitStrategy::UnionFind,
            },

            two_bit_interval: ConfigOption {
                name: "two_bit_interval",
                min: 1,
                max: usize::MAX,
                value: 1,
            },

            branching: ConfigOption {
                name: "branching",
                min: false,
                max: true,
                value: true,
            },

            cache_limit: ConfigOption {
                name: "cache_limit",
                min: 0,
                max: usize::MAX,
                value: 1 << 20,
            },

            seed: ConfigOption {
                name: "seed",
                min: 0,
                max: u64::MAX,
                value: 0,
            },
        }
    }
}

/*!
Databases for holding information relevant to a propagator.

- The [state] arena, holding the words, steps, operations, and sum equations of the topology.
- The [var_info] index, from atoms to the bits they encode.
- The [assignment], a partial valuation of tracked atoms.
- The [trail] of assignments, by decision level.
- The [cache]s of propagation results.
- The [marks] on columns and sum equations awaiting propagation.
*/

pub mod assignment;
pub mod cache;
pub mod marks;
pub mod state;
pub mod trail;
pub mod var_info;

pub use trail::LevelIndex;

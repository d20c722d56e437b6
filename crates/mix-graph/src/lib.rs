#![deny(missing_docs)]

//! Adjacency-list topologies and the seeded random k-regular generator used by
//! the simulator.

mod adjacency;
mod generators;
mod hash;
mod validate;

pub use adjacency::AdjacencyGraph;
pub use generators::{gen_random_regular, RandomRegularGraphs, DEFAULT_MAX_RESTARTS};
pub use hash::canonical_hash;
pub use validate::check_regular;

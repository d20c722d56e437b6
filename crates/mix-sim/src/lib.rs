#![deny(missing_docs)]

//! Discrete-event simulator of identity mixing on random k-regular graphs.
//!
//! Identities start at the vertex with the same index. Every edge activates
//! as an independent Poisson process and each activation swaps the two
//! identities sitting on its endpoints. When the horizon is reached the
//! engine records which identities neighbour the tracked one.

/// Simulated time and horizon bookkeeping.
pub mod clock;
/// Run parameters with serde defaults.
pub mod config;
/// Engine state machine and run loop.
pub mod engine;
/// Edge activation events.
pub mod event;
/// Neighbour frequency accounting.
pub mod frequency;
/// Vertex to identity bijection.
pub mod permutation;
/// Time-ordered activation queue.
pub mod queue;
/// Result surface returned after a run.
pub mod report;

pub use clock::SimulationClock;
pub use config::SimulationConfig;
pub use engine::{simulate, Simulation, SimulationPhase, StepOutcome};
pub use event::Event;
pub use frequency::NeighborFrequencyTable;
pub use permutation::PermutationState;
pub use queue::EventQueue;
pub use report::SimulationReport;

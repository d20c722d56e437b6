use mix_core::NodeId;
use serde::{Deserialize, Serialize};

use crate::config::SimulationConfig;
use crate::frequency::NeighborFrequencyTable;

/// Read-only outcome of a finished run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Configuration the run was started with.
    pub config: SimulationConfig,
    /// Identity whose neighbourhood was sampled.
    pub tracked_node: NodeId,
    /// Neighbour counts sampled at the end of the run.
    pub neighbor_frequencies: NeighborFrequencyTable,
    /// Number of swaps applied.
    pub swaps: u64,
    /// Time of the last popped event (zero if nothing was popped).
    pub final_time: f64,
    /// Number of events scheduled over the whole run, initial ones included.
    pub events_scheduled: u64,
    /// Canonical hash of the topology the run operated on.
    pub graph_hash: String,
}

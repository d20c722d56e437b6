use mix_core::errors::MixError;
use mix_core::NodeId;
use serde::{Deserialize, Serialize};

/// Per-identity count of appearances next to the tracked identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeighborFrequencyTable {
    counts: Vec<u64>,
}

impl NeighborFrequencyTable {
    /// Creates a zeroed table for `size` identities.
    pub fn new(size: usize) -> Self {
        Self {
            counts: vec![0; size],
        }
    }

    /// Increments the counter of `node`.
    pub fn record(&mut self, node: NodeId) -> Result<(), MixError> {
        let size = self.counts.len();
        let slot = self
            .counts
            .get_mut(node.index())
            .ok_or_else(|| MixError::invalid_node(node, size))?;
        *slot += 1;
        Ok(())
    }

    /// Counter of `node`, or `None` if it is out of range.
    pub fn get(&self, node: NodeId) -> Option<u64> {
        self.counts.get(node.index()).copied()
    }

    /// Sum over all counters.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Number of identities covered by the table.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns `true` for a table covering no identity.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Raw counters indexed by node.
    pub fn as_slice(&self) -> &[u64] {
        &self.counts
    }

    /// Identities with a non-zero counter, in ascending order.
    pub fn nonzero(&self) -> impl Iterator<Item = (NodeId, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, count)| **count > 0)
            .map(|(index, count)| (NodeId::from_index(index), *count))
    }
}

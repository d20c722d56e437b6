#![deny(missing_docs)]

//! Core traits and data types for the identity-mixing simulator.
//!
//! Graph vertices and logical identities are kept apart by two newtypes,
//! [`VertexId`] and [`NodeId`]. Topologies are consumed through the [`Topology`]
//! trait so the engine never depends on a concrete generator.

use serde::{Deserialize, Serialize};

pub mod errors;
pub mod rng;

pub use errors::{ErrorInfo, MixError};
pub use rng::{derive_substream_seed, RandomSource, RngHandle};

/// Identifier for a vertex (a fixed position) of the topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VertexId(u64);

impl VertexId {
    /// Creates a new identifier from its raw integer representation.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the identifier.
    pub fn as_raw(&self) -> u64 {
        self.0
    }

    /// Creates an identifier from an index into adjacency arrays.
    pub fn from_index(index: usize) -> Self {
        Self(index as u64)
    }

    /// Returns the identifier as an index into adjacency arrays.
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// Identifier for a logical identity that moves between vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(u64);

impl NodeId {
    /// Creates a new identifier from its raw integer representation.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the identifier.
    pub fn as_raw(&self) -> u64 {
        self.0
    }

    /// Creates an identifier from a table index.
    pub fn from_index(index: usize) -> Self {
        Self(index as u64)
    }

    /// Returns the identifier as a table index.
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// Read-only undirected topology over the vertices `0..vertex_count()`.
pub trait Topology: std::fmt::Debug + Send + Sync {
    /// Returns the number of vertices.
    fn vertex_count(&self) -> usize;

    /// Returns the neighbours of `vertex` in ascending order.
    fn neighbors(&self, vertex: VertexId) -> Result<&[VertexId], MixError>;

    /// Returns every undirected edge exactly once as `(u, v)` with `u < v`, sorted.
    fn edges(&self) -> Vec<(VertexId, VertexId)>;

    /// Returns the number of undirected edges.
    fn edge_count(&self) -> usize {
        self.edges().len()
    }

    /// Returns the degree of `vertex`.
    fn degree(&self, vertex: VertexId) -> Result<usize, MixError> {
        Ok(self.neighbors(vertex)?.len())
    }
}

/// Produces k-regular topologies from a seed.
pub trait TopologyProvider {
    /// Generates a simple undirected graph over `vertices` vertices where every
    /// vertex has exactly `degree` neighbours.
    ///
    /// Must be deterministic for a fixed `(degree, vertices, seed)` triple and
    /// must fail when no such graph exists (`degree >= vertices` or
    /// `degree * vertices` odd).
    fn generate(
        &self,
        degree: usize,
        vertices: usize,
        seed: u64,
    ) -> Result<Box<dyn Topology>, MixError>;
}

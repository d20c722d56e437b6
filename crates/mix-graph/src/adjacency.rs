use std::collections::BTreeSet;

use mix_core::errors::{ErrorInfo, MixError};
use mix_core::{Topology, VertexId};
use serde::{Deserialize, Serialize};

/// Simple undirected graph stored as sorted adjacency lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjacencyGraph {
    adjacency: Vec<Vec<VertexId>>,
    edge_count: usize,
}

impl AdjacencyGraph {
    /// Creates a graph with `vertices` isolated vertices.
    pub fn empty(vertices: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertices],
            edge_count: 0,
        }
    }

    /// Builds a graph from an undirected edge list.
    ///
    /// Rejects out-of-range endpoints, self-loops and repeated edges in either
    /// orientation.
    pub fn from_edges(vertices: usize, edges: &[(usize, usize)]) -> Result<Self, MixError> {
        let mut seen = BTreeSet::new();
        let mut graph = Self::empty(vertices);
        for &(a, b) in edges {
            for endpoint in [a, b] {
                if endpoint >= vertices {
                    return Err(MixError::Topology(
                        ErrorInfo::new("vertex-out-of-range", "edge endpoint outside graph")
                            .with_context("vertex", endpoint)
                            .with_context("vertices", vertices),
                    ));
                }
            }
            if a == b {
                return Err(MixError::Topology(
                    ErrorInfo::new("self-loop", "simple graphs cannot contain self-loops")
                        .with_context("vertex", a),
                ));
            }
            let key = (a.min(b), a.max(b));
            if !seen.insert(key) {
                return Err(MixError::Topology(
                    ErrorInfo::new("duplicate-edge", "edge already present")
                        .with_context("u", key.0)
                        .with_context("v", key.1),
                ));
            }
            graph.adjacency[a].push(VertexId::from_index(b));
            graph.adjacency[b].push(VertexId::from_index(a));
            graph.edge_count += 1;
        }
        for neighbours in &mut graph.adjacency {
            neighbours.sort();
        }
        Ok(graph)
    }

    /// Returns `true` when `u` and `v` are adjacent.
    pub fn contains_edge(&self, u: VertexId, v: VertexId) -> bool {
        self.adjacency
            .get(u.index())
            .map(|neighbours| neighbours.binary_search(&v).is_ok())
            .unwrap_or(false)
    }
}

impl Topology for AdjacencyGraph {
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn neighbors(&self, vertex: VertexId) -> Result<&[VertexId], MixError> {
        self.adjacency
            .get(vertex.index())
            .map(Vec::as_slice)
            .ok_or_else(|| MixError::invalid_vertex(vertex, self.adjacency.len()))
    }

    fn edges(&self) -> Vec<(VertexId, VertexId)> {
        let mut edges = Vec::with_capacity(self.edge_count);
        for (index, neighbours) in self.adjacency.iter().enumerate() {
            let u = VertexId::from_index(index);
            edges.extend(neighbours.iter().filter(|v| **v > u).map(|v| (u, *v)));
        }
        edges
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }
}

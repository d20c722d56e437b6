use mix_core::Topology;
use sha2::{Digest, Sha256};

/// Computes the canonical structural hash for the provided topology.
///
/// The digest covers the vertex count and the sorted edge list, so two
/// topologies hash equal exactly when they have the same labelled edges.
pub fn canonical_hash(graph: &dyn Topology) -> String {
    let mut hasher = Sha256::new();
    hasher.update(b"mix-topology:v1");
    hasher.update((graph.vertex_count() as u64).to_le_bytes());

    let mut edges = graph.edges();
    edges.sort();
    hasher.update((edges.len() as u64).to_le_bytes());
    for (u, v) in edges {
        hasher.update(u.as_raw().to_le_bytes());
        hasher.update(v.as_raw().to_le_bytes());
    }

    format!("{:x}", hasher.finalize())
}

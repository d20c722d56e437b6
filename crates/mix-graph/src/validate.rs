use mix_core::errors::{ErrorInfo, MixError};
use mix_core::{Topology, VertexId};

/// Verifies that `graph` is a simple undirected `degree`-regular graph over
/// exactly `vertices` vertices.
///
/// Any deviation is reported as a [`MixError::Configuration`] since the engine
/// cannot produce a meaningful sample on such a topology.
pub fn check_regular(graph: &dyn Topology, degree: usize, vertices: usize) -> Result<(), MixError> {
    if graph.vertex_count() != vertices {
        return Err(MixError::Configuration(
            ErrorInfo::new("vertex-count-mismatch", "topology size differs from node count")
                .with_context("expected", vertices)
                .with_context("actual", graph.vertex_count()),
        ));
    }
    for index in 0..vertices {
        let vertex = VertexId::from_index(index);
        let neighbours = graph.neighbors(vertex)?;
        if neighbours.len() != degree {
            return Err(MixError::Configuration(
                ErrorInfo::new("not-regular", "vertex degree differs from configured degree")
                    .with_context("vertex", index)
                    .with_context("expected", degree)
                    .with_context("actual", neighbours.len()),
            ));
        }
        for (pos, &other) in neighbours.iter().enumerate() {
            if other == vertex || other.index() >= vertices {
                return Err(MixError::Configuration(
                    ErrorInfo::new("invalid-neighbour", "neighbour is a self-loop or out of range")
                        .with_context("vertex", index)
                        .with_context("neighbour", other.as_raw()),
                ));
            }
            if neighbours[..pos].contains(&other) {
                return Err(MixError::Configuration(
                    ErrorInfo::new("multi-edge", "neighbour listed more than once")
                        .with_context("vertex", index)
                        .with_context("neighbour", other.as_raw()),
                ));
            }
            if !graph.neighbors(other)?.contains(&vertex) {
                return Err(MixError::Configuration(
                    ErrorInfo::new("asymmetric-edge", "edge missing its reverse direction")
                        .with_context("u", index)
                        .with_context("v", other.as_raw()),
                ));
            }
        }
    }
    Ok(())
}

use mix_core::errors::{ErrorInfo, MixError};
use mix_core::{NodeId, VertexId};

/// Bidirectional mapping between vertices and the identities occupying them.
///
/// `vertex_of[node_of[v]] == v` and `node_of[vertex_of[i]] == i` hold before
/// and after every public operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermutationState {
    vertex_of: Vec<VertexId>,
    node_of: Vec<NodeId>,
}

impl PermutationState {
    /// Places identity `i` on vertex `i` for every `i < size`.
    pub fn identity(size: usize) -> Self {
        Self {
            vertex_of: (0..size).map(VertexId::from_index).collect(),
            node_of: (0..size).map(NodeId::from_index).collect(),
        }
    }

    /// Number of vertices (and identities).
    pub fn len(&self) -> usize {
        self.node_of.len()
    }

    /// Returns `true` when the permutation covers no vertex.
    pub fn is_empty(&self) -> bool {
        self.node_of.is_empty()
    }

    /// Vertex currently holding `node`.
    pub fn vertex_for(&self, node: NodeId) -> Result<VertexId, MixError> {
        self.vertex_of
            .get(node.index())
            .copied()
            .ok_or_else(|| MixError::invalid_node(node, self.len()))
    }

    /// Identity currently sitting on `vertex`.
    pub fn node_for(&self, vertex: VertexId) -> Result<NodeId, MixError> {
        self.node_of
            .get(vertex.index())
            .copied()
            .ok_or_else(|| MixError::invalid_vertex(vertex, self.len()))
    }

    /// Exchanges the identities sitting on `vertex_a` and `vertex_b`.
    ///
    /// Both vertices are validated before anything is written, so a failed
    /// swap leaves the state untouched.
    pub fn swap(&mut self, vertex_a: VertexId, vertex_b: VertexId) -> Result<(), MixError> {
        let node_a = self.node_for(vertex_a)?;
        let node_b = self.node_for(vertex_b)?;
        self.node_of[vertex_a.index()] = node_b;
        self.node_of[vertex_b.index()] = node_a;
        self.vertex_of[node_a.index()] = vertex_b;
        self.vertex_of[node_b.index()] = vertex_a;
        Ok(())
    }

    /// Returns `true` when every identity still sits on its starting vertex.
    pub fn is_identity(&self) -> bool {
        self.node_of
            .iter()
            .enumerate()
            .all(|(index, node)| node.index() == index)
    }

    /// Verifies that both maps are inverse bijections.
    pub fn check_consistency(&self) -> Result<(), MixError> {
        if self.vertex_of.len() != self.node_of.len() {
            return Err(MixError::InvariantViolation(
                ErrorInfo::new("broken-bijection", "map sizes differ")
                    .with_context("vertex_of", self.vertex_of.len())
                    .with_context("node_of", self.node_of.len()),
            ));
        }
        for (index, node) in self.node_of.iter().enumerate() {
            if self.vertex_of.get(node.index()).map(VertexId::index) != Some(index) {
                return Err(MixError::InvariantViolation(
                    ErrorInfo::new("broken-bijection", "vertex and node maps disagree")
                        .with_context("vertex", index)
                        .with_context("node", node.as_raw()),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_mismatch_breaks_bijection() {
        let mut state = PermutationState::identity(3);
        state.vertex_of.push(VertexId::from_index(3));

        let err = state.check_consistency().unwrap_err();
        assert!(matches!(err, MixError::InvariantViolation(_)));
        assert_eq!(err.code(), "broken-bijection");
        assert_eq!(err.info().context.get("vertex_of"), Some(&"4".to_string()));
        assert_eq!(err.info().context.get("node_of"), Some(&"3".to_string()));
    }

    #[test]
    fn disagreeing_maps_break_bijection() {
        let mut state = PermutationState::identity(3);
        state.node_of[0] = NodeId::from_index(1);

        let err = state.check_consistency().unwrap_err();
        assert_eq!(err.code(), "broken-bijection");
        assert_eq!(err.info().context.get("vertex"), Some(&"0".to_string()));
        assert_eq!(err.info().context.get("node"), Some(&"1".to_string()));
    }

    #[test]
    fn one_sided_swap_is_detected() {
        let mut state = PermutationState::identity(4);
        state.swap(VertexId::from_index(1), VertexId::from_index(2)).unwrap();
        state.check_consistency().unwrap();

        state.vertex_of.swap(0, 3);
        assert_eq!(state.check_consistency().unwrap_err().code(), "broken-bijection");
    }
}

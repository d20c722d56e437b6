use mix_core::errors::MixError;
use mix_core::{NodeId, VertexId};
use mix_sim::PermutationState;
use proptest::prelude::*;

fn v(index: usize) -> VertexId {
    VertexId::from_index(index)
}

fn n(index: usize) -> NodeId {
    NodeId::from_index(index)
}

#[test]
fn starts_as_identity() {
    let state = PermutationState::identity(4);
    assert!(state.is_identity());
    assert_eq!(state.len(), 4);
    for index in 0..4 {
        assert_eq!(state.vertex_for(n(index)).unwrap(), v(index));
        assert_eq!(state.node_for(v(index)).unwrap(), n(index));
    }
    state.check_consistency().unwrap();
}

#[test]
fn swap_exchanges_occupants() {
    let mut state = PermutationState::identity(4);
    state.swap(v(0), v(2)).unwrap();
    assert_eq!(state.node_for(v(0)).unwrap(), n(2));
    assert_eq!(state.node_for(v(2)).unwrap(), n(0));
    assert_eq!(state.vertex_for(n(0)).unwrap(), v(2));
    assert_eq!(state.vertex_for(n(2)).unwrap(), v(0));
    assert!(!state.is_identity());

    state.swap(v(2), v(3)).unwrap();
    assert_eq!(state.node_for(v(3)).unwrap(), n(0));
    assert_eq!(state.vertex_for(n(3)).unwrap(), v(2));

    state.swap(v(1), v(1)).unwrap();
    assert_eq!(state.node_for(v(1)).unwrap(), n(1));
    state.check_consistency().unwrap();
}

#[test]
fn out_of_range_vertex_is_rejected_without_mutation() {
    let mut state = PermutationState::identity(3);
    state.swap(v(0), v(1)).unwrap();
    let before = state.clone();

    let err = state.swap(v(2), v(3)).unwrap_err();
    match err {
        MixError::InvariantViolation(info) => {
            assert_eq!(info.code, "invalid-vertex");
            assert_eq!(info.context.get("vertex"), Some(&"3".to_string()));
            assert_eq!(info.context.get("size"), Some(&"3".to_string()));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(state, before);
    assert_eq!(state.vertex_for(n(9)).unwrap_err().code(), "invalid-node");
    assert_eq!(state.node_for(v(9)).unwrap_err().code(), "invalid-vertex");
}

proptest! {
    #[test]
    fn bijection_survives_any_swap_sequence(
        size in 1usize..40,
        swaps in prop::collection::vec((0usize..40, 0usize..40), 0..200),
    ) {
        let mut state = PermutationState::identity(size);
        for (a, b) in swaps {
            let result = state.swap(v(a), v(b));
            prop_assert_eq!(result.is_ok(), a < size && b < size);
        }
        state.check_consistency().unwrap();
        for index in 0..size {
            let node = state.node_for(v(index)).unwrap();
            prop_assert_eq!(state.vertex_for(node).unwrap(), v(index));
            let vertex = state.vertex_for(n(index)).unwrap();
            prop_assert_eq!(state.node_for(vertex).unwrap(), n(index));
        }
    }
}

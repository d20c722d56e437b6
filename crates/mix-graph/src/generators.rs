use std::collections::{BTreeMap, BTreeSet};
use std::iter;

use mix_core::errors::{ErrorInfo, MixError};
use mix_core::rng::{RngHandle, TOPOLOGY_SUBSTREAM};
use mix_core::{Topology, TopologyProvider};
use rand::seq::SliceRandom;
use tracing::debug;

use crate::adjacency::AdjacencyGraph;

/// Number of full restarts attempted before giving up on a pairing.
pub const DEFAULT_MAX_RESTARTS: usize = 10_000;

/// Seeded provider of random simple k-regular graphs.
#[derive(Debug, Clone, Copy)]
pub struct RandomRegularGraphs {
    /// Number of full restarts allowed before generation fails.
    pub max_restarts: usize,
}

impl Default for RandomRegularGraphs {
    fn default() -> Self {
        Self {
            max_restarts: DEFAULT_MAX_RESTARTS,
        }
    }
}

impl TopologyProvider for RandomRegularGraphs {
    fn generate(
        &self,
        degree: usize,
        vertices: usize,
        seed: u64,
    ) -> Result<Box<dyn Topology>, MixError> {
        let mut rng = RngHandle::substream(seed, TOPOLOGY_SUBSTREAM);
        let graph = generate_with_budget(degree, vertices, self.max_restarts, &mut rng)?;
        Ok(Box::new(graph))
    }
}

/// Generates a random simple `degree`-regular graph over `vertices` vertices.
///
/// Stubs (`degree` per vertex) are shuffled and paired. Pairs that would form
/// a self-loop or a repeated edge are returned to the pool and re-paired in the
/// next round. A round whose leftover stubs can no longer form any new edge
/// restarts the construction from scratch.
pub fn gen_random_regular(
    degree: usize,
    vertices: usize,
    rng: &mut RngHandle,
) -> Result<AdjacencyGraph, MixError> {
    generate_with_budget(degree, vertices, DEFAULT_MAX_RESTARTS, rng)
}

fn generate_with_budget(
    degree: usize,
    vertices: usize,
    max_restarts: usize,
    rng: &mut RngHandle,
) -> Result<AdjacencyGraph, MixError> {
    if degree >= vertices {
        return Err(MixError::Topology(
            ErrorInfo::new("degree-too-large", "degree must be smaller than the vertex count")
                .with_context("degree", degree)
                .with_context("vertices", vertices),
        ));
    }
    if (degree * vertices) % 2 != 0 {
        return Err(MixError::Topology(
            ErrorInfo::new("odd-degree-sum", "degree * vertices must be even")
                .with_context("degree", degree)
                .with_context("vertices", vertices),
        ));
    }
    if degree == 0 {
        return Ok(AdjacencyGraph::empty(vertices));
    }

    for attempt in 0..max_restarts.max(1) {
        if let Some(edges) = try_pairing(degree, vertices, rng) {
            debug!(degree, vertices, attempt, "random regular graph generated");
            let edges: Vec<(usize, usize)> = edges.into_iter().collect();
            return AdjacencyGraph::from_edges(vertices, &edges);
        }
        debug!(degree, vertices, attempt, "pairing got stuck, restarting");
    }

    Err(MixError::Topology(
        ErrorInfo::new("generation-exhausted", "no regular pairing found within restart budget")
            .with_context("degree", degree)
            .with_context("vertices", vertices)
            .with_context("restarts", max_restarts)
            .with_hint("increase max_restarts or try another seed"),
    ))
}

fn try_pairing(degree: usize, vertices: usize, rng: &mut RngHandle) -> Option<BTreeSet<(usize, usize)>> {
    let mut edges = BTreeSet::new();
    let mut stubs: Vec<usize> = (0..degree).flat_map(|_| 0..vertices).collect();
    let max_rounds = degree * vertices + 64;

    for _ in 0..max_rounds {
        if stubs.is_empty() {
            return Some(edges);
        }
        let mut leftover: BTreeMap<usize, usize> = BTreeMap::new();
        stubs.shuffle(rng);
        for pair in stubs.chunks_exact(2) {
            let key = ordered(pair[0], pair[1]);
            if key.0 == key.1 || !edges.insert(key) {
                *leftover.entry(key.0).or_insert(0) += 1;
                *leftover.entry(key.1).or_insert(0) += 1;
            }
        }
        if !can_progress(&edges, &leftover) {
            return None;
        }
        stubs = leftover
            .iter()
            .flat_map(|(&vertex, &count)| iter::repeat(vertex).take(count))
            .collect();
    }
    None
}

/// Returns `true` when at least one pair of distinct leftover vertices is not
/// yet adjacent.
fn can_progress(edges: &BTreeSet<(usize, usize)>, leftover: &BTreeMap<usize, usize>) -> bool {
    if leftover.is_empty() {
        return true;
    }
    let vertices: Vec<usize> = leftover.keys().copied().collect();
    for (idx, &a) in vertices.iter().enumerate() {
        for &b in &vertices[..idx] {
            if !edges.contains(&ordered(a, b)) {
                return true;
            }
        }
    }
    false
}

fn ordered(a: usize, b: usize) -> (usize, usize) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

//! Generates random graphs for tests and benchmarks.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::edge::Edge;
use crate::node::NodeId;

/// Generates up to `edge_count` random directed edges among the nodes
/// `0..node_count`.
///
/// The node ids are built once up front, so memory grows with
/// `node_count`.
///
/// Costs are whole numbers in `1..=max_cost` so that sums of costs are
/// exact in `f32` and distances found along different paths compare
/// equal when they should. Self-loops and duplicate pairs are skipped,
/// so fewer edges than requested may come back on dense graphs.
///
/// The same `seed` always yields the same edges.
pub fn generate_edges(node_count: u32, edge_count: usize, max_cost: u32, seed: u64) -> Vec<Edge> {
    let mut edges: Vec<Edge> = Vec::with_capacity(edge_count);
    if node_count < 2 || max_cost == 0 {
        return edges;
    }

    let nodes: Vec<NodeId> = (0..node_count).filter_map(NodeId::new).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    let max_attempts = edge_count.saturating_mul(4);
    let mut attempts = 0;
    while edges.len() < edge_count && attempts < max_attempts {
        attempts += 1;
        let from = nodes[rng.gen_range(0..nodes.len())];
        let to = nodes[rng.gen_range(0..nodes.len())];
        if from == to || edges.iter().any(|edge| edge.from == from && edge.to == to) {
            continue;
        }
        let cost = rng.gen_range(1..=max_cost) as f32;
        edges.push(Edge::new(from, to, cost));
    }

    debug!(
        "generated {} edges over {} nodes after {} attempts",
        edges.len(),
        node_count,
        attempts
    );
    edges
}

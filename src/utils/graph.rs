//! Helper functons for working with graphs.

use crate::edge::Edge;
use crate::node::NodeId;

/// Build edges among nodes.
///
/// The function will try to connect every node to every other node.
/// However, constraints can be added to prevent ineligible nodes from
/// being connected.
///
/// # Arguments
/// * `nodes` - A slice of nodes.
/// * `constraint` - Only nodes within a constraint can be connected.
/// * `constraint_function` - A function that takes two nodes and
///   returns a float to compare against `constraint`.
/// * `cost_function` - A function that computes the "weight" between
///   two nodes.
///
/// # Returns
/// A vector of directed edges, grouped by source node in the order of
/// `nodes`.
///
/// # Time Complexity
/// *O*(*n^2*) at worst if the constraint is not met for all nodes.
pub fn build_edges(
    nodes: &[NodeId],
    constraint: f32,
    constraint_function: fn(NodeId, NodeId) -> f32,
    cost_function: fn(NodeId, NodeId) -> f32,
) -> Vec<Edge> {
    let mut edges = Vec::new();
    for &from in nodes {
        for &to in nodes {
            if from != to && constraint_function(from, to) <= constraint {
                edges.push(Edge::new(from, to, cost_function(from, to)));
            }
        }
    }
    edges
}

#[cfg(test)]
mod graph_utils_tests {
    use super::*;

    #[test]
    fn test_build_edges_complete_graph() {
        let nodes: Vec<NodeId> = (0..4).filter_map(NodeId::new).collect();
        let edges = build_edges(&nodes, f32::MAX, |_, _| 0.0, |_, _| 1.0);

        assert_eq!(edges.len(), 12);
        assert!(edges.iter().all(|edge| edge.from != edge.to));
        assert_eq!(edges[0].to, nodes[1]);
        assert_eq!(edges[1].to, nodes[2]);
    }

    #[test]
    fn test_build_edges_no_edge_when_constraint_unmet() {
        let nodes: Vec<NodeId> = (0..4).filter_map(NodeId::new).collect();
        let edges = build_edges(&nodes, 0.0, |_, _| 1.0, |_, _| 1.0);

        assert!(edges.is_empty());
    }

    #[test]
    fn test_build_edges_uses_cost_function() {
        let nodes: Vec<NodeId> = (1..3).filter_map(NodeId::new).collect();
        let edges = build_edges(&nodes, 1.0, |_, _| 1.0, |from, to| {
            (from.raw() * 10 + to.raw()) as f32
        });

        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0].cost.into_inner(), 12.0);
        assert_eq!(edges[1].cost.into_inner(), 21.0);
    }
}

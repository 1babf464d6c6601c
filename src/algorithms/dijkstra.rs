//! Single-pair shortest path search.
//!
//! Classic Dijkstra over two [`NodeRecordSet`]s: the frontier holds
//! tentative distances, the visited set holds settled ones. There is no
//! heap and no decrease-key, the frontier is scanned in full to pick the
//! next node to settle.
//!
//! Weights must not be negative.

use serde::{Deserialize, Serialize};

use crate::algorithms::graph::Graph;
use crate::node::{NodeId, NodeRecord};
use crate::record_set::NodeRecordSet;

/// Tunes what a search returns.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Rebuild the path to the destination once it is reached.
    pub reconstruct_path: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            reconstruct_path: true,
        }
    }
}

/// Outcome of a search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Length of the shortest path, `f32::INFINITY` if the destination
    /// cannot be reached.
    pub distance: f32,

    /// The shortest path as a chain of records from the source to the
    /// destination. Each record carries its predecessor on the path and
    /// its distance from the source.
    ///
    /// [`None`] when the destination is unreachable or the path was not
    /// requested.
    pub path: Option<NodeRecordSet>,
}

impl SearchResult {
    /// Result of a search whose destination cannot be reached.
    pub fn unreachable() -> SearchResult {
        SearchResult {
            distance: f32::INFINITY,
            path: None,
        }
    }

    /// Returns true if the destination was reached.
    pub fn is_reachable(&self) -> bool {
        self.distance != f32::INFINITY
    }

    /// Returns the nodes of the path from source to destination, or an
    /// empty vector if there is no path.
    pub fn nodes(&self) -> Vec<NodeId> {
        self.path
            .as_ref()
            .map(NodeRecordSet::nodes)
            .unwrap_or_default()
    }
}

/// Finds the shortest path from `source` to `destination` and rebuilds
/// it.
///
/// See [`search_with`].
pub fn search<G: Graph + ?Sized>(graph: &G, source: NodeId, destination: NodeId) -> SearchResult {
    search_with(graph, source, destination, &SearchOptions::default())
}

/// Finds the shortest path from `source` to `destination`.
///
/// # Arguments
/// * `graph` - The graph to search. It must not change during the call.
/// * `source` - The node to start from.
/// * `destination` - The node to end at.
/// * `options` - Whether to rebuild the path.
///
/// # Returns
/// The length of the shortest path and, if requested, the path itself.
/// An unreachable destination yields a distance of `f32::INFINITY` and
/// no path.
///
/// # Time Complexity
/// *O*(*n^2 + m\*n*): every settled node scans the frontier, and every
/// edge relaxation scans the visited set and the frontier.
pub fn search_with<G: Graph + ?Sized>(
    graph: &G,
    source: NodeId,
    destination: NodeId,
    options: &SearchOptions,
) -> SearchResult {
    debug_assert!(source.is_some(), "search source must be a real node");
    debug_assert!(destination.is_some(), "search destination must be a real node");
    debug!("searching shortest path from {} to {}", source, destination);

    let mut frontier = NodeRecordSet::new();
    let mut visited = NodeRecordSet::new();
    let mut neighbors: Vec<NodeId> = Vec::new();
    frontier.insert_record(NodeRecord::origin(source));

    while !frontier.is_empty() {
        let current = frontier.min();
        let current_distance = frontier.distance(current);
        let current_predecessor = frontier.predecessor(current);

        visited.insert(current, current_predecessor, current_distance);
        frontier.remove(current);
        trace!(
            "settled {} at distance {} via {}",
            current,
            current_distance,
            current_predecessor
        );

        if current == destination {
            debug!(
                "reached {} at distance {} after settling {} nodes",
                destination,
                current_distance,
                visited.len()
            );
            let path = options
                .reconstruct_path
                .then(|| build_path_to(&visited, destination));
            return SearchResult {
                distance: current_distance,
                path,
            };
        }

        neighbors.clear();
        neighbors.resize(graph.neighbor_count(current), NodeId::NO_ID);
        graph.neighbors(current, &mut neighbors);

        for &neighbor in &neighbors {
            if visited.contains(neighbor) {
                continue;
            }
            let candidate = current_distance + graph.edge_weight(current, neighbor);
            // an unseen neighbor is at infinity, so this inserts it
            if candidate < frontier.distance(neighbor) {
                frontier.update_or_insert(neighbor, current, candidate);
            }
        }
    }

    debug!(
        "{} is unreachable from {} ({} nodes settled)",
        destination,
        source,
        visited.len()
    );
    SearchResult::unreachable()
}

/// Rebuilds the path from the search origin to `node` out of the
/// predecessor links stored in `visited`.
///
/// The origin is the record whose predecessor is [`NodeId::NO_ID`]; it
/// is emitted first with a distance of `0.0`. Every following node is
/// emitted with the predecessor and distance found in `visited`.
fn build_path_to(visited: &NodeRecordSet, node: NodeId) -> NodeRecordSet {
    let mut chain = vec![node];
    let mut current = node;
    loop {
        let predecessor = visited.predecessor(current);
        if predecessor.is_none() {
            break;
        }
        chain.push(predecessor);
        current = predecessor;
    }

    let mut path = NodeRecordSet::new();
    for &step in chain.iter().rev() {
        match visited.get(step) {
            Some(record) if !record.is_origin() => path.insert_record(*record),
            _ => path.insert_record(NodeRecord::origin(step)),
        }
    }
    path
}

#[cfg(test)]
mod dijkstra_tests {
    use super::*;
    use crate::algorithms::graph::AdjacencyGraph;
    use crate::edge::Edge;

    fn id(raw: u32) -> NodeId {
        NodeId::new(raw).unwrap()
    }

    const S: u32 = 0;
    const A: u32 = 1;
    const B: u32 = 2;
    const T: u32 = 3;

    /// S->A(1), S->B(4), A->B(1), A->T(5), B->T(1)
    fn diamond() -> AdjacencyGraph {
        AdjacencyGraph::from_edges(&[
            Edge::new(id(S), id(A), 1.0),
            Edge::new(id(S), id(B), 4.0),
            Edge::new(id(A), id(B), 1.0),
            Edge::new(id(A), id(T), 5.0),
            Edge::new(id(B), id(T), 1.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_diamond_shortest_path() {
        let graph = diamond();
        let result = search(&graph, id(S), id(T));

        assert_eq!(result.distance, 3.0);
        assert!(result.is_reachable());
        assert_eq!(result.nodes(), vec![id(S), id(A), id(B), id(T)]);

        let path = result.path.unwrap();
        assert!(path.contains_edge(NodeId::NO_ID, id(S)));
        assert!(path.contains_edge(id(S), id(A)));
        assert!(path.contains_edge(id(A), id(B)));
        assert!(path.contains_edge(id(B), id(T)));
        assert_eq!(path.distance(id(S)), 0.0);
        assert_eq!(path.distance(id(A)), 1.0);
        assert_eq!(path.distance(id(B)), 2.0);
        assert_eq!(path.last().unwrap().distance, 3.0);
    }

    #[test]
    fn test_source_is_destination() {
        let graph = diamond();
        let result = search(&graph, id(A), id(A));

        assert_eq!(result.distance, 0.0);
        assert_eq!(result.nodes(), vec![id(A)]);
        let path = result.path.unwrap();
        assert_eq!(path.predecessor(id(A)), NodeId::NO_ID);
    }

    #[test]
    fn test_source_unknown_to_graph_is_destination() {
        let graph = AdjacencyGraph::new();
        let result = search(&graph, id(5), id(5));

        assert_eq!(result.distance, 0.0);
        assert_eq!(result.nodes(), vec![id(5)]);
    }

    #[test]
    fn test_unreachable_destination() {
        let graph = diamond();
        // edges only go forward
        let result = search(&graph, id(T), id(S));

        assert_eq!(result.distance, f32::INFINITY);
        assert!(!result.is_reachable());
        assert!(result.path.is_none());
        assert!(result.nodes().is_empty());
    }

    #[test]
    fn test_unreachable_in_disconnected_graph() {
        let nodes: Vec<NodeId> = (0..50).map(id).collect();
        let graph = AdjacencyGraph::connect(&nodes, 0.0, |_, _| 1.0, |_, _| 1.0).unwrap();

        assert_eq!(search(&graph, id(0), id(49)), SearchResult::unreachable());
    }

    #[test]
    fn test_path_not_requested() {
        let graph = diamond();
        let result = search_with(
            &graph,
            id(S),
            id(T),
            &SearchOptions {
                reconstruct_path: false,
            },
        );

        assert_eq!(result.distance, 3.0);
        assert!(result.path.is_none());
    }

    #[test]
    fn test_self_loop_is_ignored() {
        let graph = AdjacencyGraph::from_edges(&[
            Edge::new(id(0), id(0), 0.0),
            Edge::new(id(0), id(1), 2.0),
            Edge::new(id(1), id(1), 1.0),
            Edge::new(id(1), id(2), 2.0),
        ])
        .unwrap();
        let result = search(&graph, id(0), id(2));

        assert_eq!(result.distance, 4.0);
        assert_eq!(result.nodes(), vec![id(0), id(1), id(2)]);
    }

    #[test]
    fn test_longer_path_with_fewer_weight_wins() {
        // 0 -> 4 directly costs 10, the chain 0 -> 1 -> 2 -> 3 -> 4 costs 4
        let graph = AdjacencyGraph::from_edges(&[
            Edge::new(id(0), id(4), 10.0),
            Edge::new(id(0), id(1), 1.0),
            Edge::new(id(1), id(2), 1.0),
            Edge::new(id(2), id(3), 1.0),
            Edge::new(id(3), id(4), 1.0),
        ])
        .unwrap();
        let result = search(&graph, id(0), id(4));

        assert_eq!(result.distance, 4.0);
        assert_eq!(result.nodes(), vec![id(0), id(1), id(2), id(3), id(4)]);
    }

    #[test]
    fn test_zero_weight_edges() {
        let graph = AdjacencyGraph::from_edges(&[
            Edge::new(id(0), id(1), 0.0),
            Edge::new(id(1), id(2), 0.0),
            Edge::new(id(0), id(2), 1.0),
        ])
        .unwrap();
        let result = search(&graph, id(0), id(2));

        assert_eq!(result.distance, 0.0);
        assert_eq!(result.nodes(), vec![id(0), id(1), id(2)]);
    }

    #[test]
    fn test_fractional_weights() {
        let graph = AdjacencyGraph::from_edges(&[
            Edge::new(id(0), id(1), 0.5),
            Edge::new(id(1), id(2), 0.25),
            Edge::new(id(0), id(2), 1.0),
        ])
        .unwrap();

        assert_eq!(search(&graph, id(0), id(2)).distance, 0.75);
    }

    #[test]
    fn test_search_is_idempotent() {
        let graph = diamond();
        let first = search(&graph, id(S), id(T));
        let second = search(&graph, id(S), id(T));

        assert_eq!(first, second);
    }

    #[test]
    fn test_build_path_to_origin_only() {
        let mut visited = NodeRecordSet::new();
        visited.insert(id(3), NodeId::NO_ID, 0.0);

        let path = build_path_to(&visited, id(3));
        assert_eq!(path.nodes(), vec![id(3)]);
        assert!(path.get(id(3)).unwrap().is_origin());
    }

    #[test]
    fn test_build_path_to_follows_predecessors() {
        let mut visited = NodeRecordSet::new();
        visited.insert(id(0), NodeId::NO_ID, 0.0);
        visited.insert(id(2), id(0), 1.0);
        visited.insert(id(5), id(0), 1.5);
        visited.insert(id(1), id(2), 3.0);

        let path = build_path_to(&visited, id(1));
        assert_eq!(path.nodes(), vec![id(0), id(2), id(1)]);
        assert_eq!(path.distance(id(1)), 3.0);
        assert!(!path.contains(id(5)));
    }

    #[test]
    fn test_search_options_default() {
        assert!(SearchOptions::default().reconstruct_path);
    }
}

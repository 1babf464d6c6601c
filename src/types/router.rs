//! The router engine.
//!
//! The engine stores a graph given an input of nodes and edges and
//! answers shortest path queries on it. Two algorithms are available:
//! the linear-scan Dijkstra search of this crate and petgraph's A*,
//! which serves as a reference implementation.

/// The router engine module.
pub mod engine {
    use std::collections::HashMap;

    use ordered_float::OrderedFloat;
    use petgraph::{algo::astar, graph::NodeIndex, stable_graph::StableDiGraph, visit::EdgeRef};

    use crate::{
        algorithms::{
            dijkstra::{search_with, SearchOptions, SearchResult},
            graph::{Graph, GraphError},
        },
        edge::Edge,
        node::{NodeId, NodeRecord},
        record_set::NodeRecordSet,
    };

    /// A Router struct contains a graph of nodes and also a hashmap
    /// that maps a node to its index in the graph.
    #[derive(Debug)]
    pub struct Router {
        graph: StableDiGraph<NodeId, OrderedFloat<f32>>,
        node_indices: HashMap<NodeId, NodeIndex>,
        edges: Vec<Edge>,
    }

    /// Path finding algorithms.
    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    pub enum Algorithm {
        /// The linear-scan Dijkstra search.
        Dijkstra,
        /// petgraph's A* algorithm with a zero heuristic.
        AStar,
    }

    impl Router {
        /// Creates a new router holding `nodes` and `edges`.
        ///
        /// Endpoints of `edges` missing from `nodes` are added. When
        /// the same directed pair appears twice, the last weight wins.
        ///
        /// # Errors
        /// [`GraphError`] for the first edge or node that uses the
        /// reserved identifier or carries a negative or non-finite weight.
        pub fn new(nodes: &[NodeId], edges: &[Edge]) -> Result<Router, GraphError> {
            info!("[1/3] Initializing the router engine...");
            let mut router = Router {
                graph: StableDiGraph::new(),
                node_indices: HashMap::new(),
                edges: Vec::with_capacity(edges.len()),
            };

            info!("[2/3] Adding {} nodes...", nodes.len());
            for &node in nodes {
                if node.is_none() {
                    return Err(GraphError::ReservedNodeId {
                        from: node,
                        to: node,
                    });
                }
                router.index_of(node);
            }

            info!("[3/3] Adding {} edges...", edges.len());
            for edge in edges {
                router.add_edge(edge)?;
            }

            info!(
                "Router engine is ready with {} nodes and {} edges.",
                router.get_node_count(),
                router.get_edge_count()
            );
            Ok(router)
        }

        /// Get the NodeIndex struct for a given node. The NodeIndex
        /// struct is used to reference things in the graph.
        pub fn get_node_index(&self, node: NodeId) -> Option<NodeIndex> {
            self.node_indices.get(&node).cloned()
        }

        /// Get the node stored at a given index.
        pub fn get_node_by_index(&self, index: NodeIndex) -> Option<NodeId> {
            self.graph.node_weight(index).copied()
        }

        /// Return the number of edges in the graph.
        pub fn get_edge_count(&self) -> usize {
            self.graph.edge_count()
        }

        /// Get the number of nodes in the graph.
        pub fn get_node_count(&self) -> usize {
            self.graph.node_count()
        }

        /// Get all the edges in the graph, without duplicates.
        pub fn get_edges(&self) -> &[Edge] {
            &self.edges
        }

        /// Find the shortest path between two nodes.
        ///
        /// # Arguments
        /// * `from` - The node to start from.
        /// * `to` - The node to end at.
        /// * `algorithm` - The algorithm to use.
        ///
        /// # Returns
        /// The total cost and the path. Both algorithms report an
        /// unreachable destination, or an endpoint missing from the
        /// graph, with a cost of `f32::INFINITY` and no path.
        pub fn find_shortest_path(
            &self,
            from: NodeId,
            to: NodeId,
            algorithm: Algorithm,
        ) -> SearchResult {
            let (Some(from_index), Some(to_index)) =
                (self.get_node_index(from), self.get_node_index(to))
            else {
                warn!("Cannot route from {} to {}: unknown node", from, to);
                return SearchResult::unreachable();
            };

            match algorithm {
                Algorithm::Dijkstra => search_with(self, from, to, &SearchOptions::default()),
                Algorithm::AStar => astar(
                    &self.graph,
                    from_index,
                    |finish| finish == to_index,
                    |e| (*e.weight()).into_inner(),
                    |_| 0.0,
                )
                .map_or_else(SearchResult::unreachable, |(cost, path)| SearchResult {
                    distance: cost,
                    path: Some(self.records_along(&path)),
                }),
            }
        }

        /// Inserts `edge`, replacing the weight of an existing edge
        /// between the same nodes.
        fn add_edge(&mut self, edge: &Edge) -> Result<(), GraphError> {
            let Edge { from, to, cost } = *edge;
            if from.is_none() || to.is_none() {
                return Err(GraphError::ReservedNodeId { from, to });
            }
            if !cost.into_inner().is_finite() {
                return Err(GraphError::NonFiniteWeight {
                    from,
                    to,
                    weight: cost.into_inner(),
                });
            }
            if cost.into_inner() < 0.0 {
                return Err(GraphError::NegativeWeight {
                    from,
                    to,
                    weight: cost.into_inner(),
                });
            }

            let from_index = self.index_of(from);
            let to_index = self.index_of(to);
            self.graph.update_edge(from_index, to_index, cost);
            match self
                .edges
                .iter_mut()
                .find(|known| known.from == from && known.to == to)
            {
                Some(known) => known.cost = cost,
                None => self.edges.push(*edge),
            }
            Ok(())
        }

        /// Returns the index of `node`, adding it to the graph first if
        /// needed.
        fn index_of(&mut self, node: NodeId) -> NodeIndex {
            let graph = &mut self.graph;
            *self
                .node_indices
                .entry(node)
                .or_insert_with(|| graph.add_node(node))
        }

        /// Turns a path of indices into a chain of records carrying the
        /// running cost.
        fn records_along(&self, path: &[NodeIndex]) -> NodeRecordSet {
            let mut records = NodeRecordSet::new();
            let mut previous: Option<NodeIndex> = None;
            let mut distance = 0.0;
            for &index in path {
                let node = self.graph[index];
                match previous {
                    None => records.insert_record(NodeRecord::origin(node)),
                    Some(previous_index) => {
                        distance += self
                            .graph
                            .find_edge(previous_index, index)
                            .and_then(|edge| self.graph.edge_weight(edge))
                            .map_or(f32::INFINITY, |cost| cost.into_inner());
                        records.insert(node, self.graph[previous_index], distance);
                    }
                }
                previous = Some(index);
            }
            records
        }
    }

    impl Graph for Router {
        fn neighbor_count(&self, node: NodeId) -> usize {
            self.get_node_index(node)
                .map_or(0, |index| self.graph.neighbors(index).count())
        }

        fn neighbors(&self, node: NodeId, buffer: &mut [NodeId]) {
            if let Some(index) = self.get_node_index(node) {
                for (slot, neighbor) in buffer.iter_mut().zip(self.graph.neighbors(index)) {
                    *slot = self.graph[neighbor];
                }
            }
        }

        fn edge_weight(&self, from: NodeId, to: NodeId) -> f32 {
            self.get_node_index(from)
                .zip(self.get_node_index(to))
                .and_then(|(from_index, to_index)| self.graph.find_edge(from_index, to_index))
                .and_then(|edge| self.graph.edge_weight(edge))
                .map_or(f32::INFINITY, |cost| cost.into_inner())
        }
    }
}

//! Defines the graph interface consumed by the search and a simple
//! implementation of it.
//!
//! The search only ever asks three questions: how many neighbors a
//! node has, which nodes they are, and how heavy the edge to one of
//! them is. Anything answering them through the [`Graph`] trait can be
//! searched.
//!
//! [`AdjacencyGraph`] uses a [`HashMap`] to represent a directed
//! graph. The key is the [`NodeId`], the value is the list of outgoing
//! edges in insertion order.

use std::collections::HashMap;

use ordered_float::OrderedFloat;
use thiserror::Error;

use crate::edge::Edge;
use crate::node::NodeId;
use crate::utils::graph::build_edges;

/// Read-only view of a weighted directed graph.
pub trait Graph {
    /// Returns the number of outgoing neighbors of `node`.
    fn neighbor_count(&self, node: NodeId) -> usize;

    /// Writes the outgoing neighbors of `node` into `buffer`.
    ///
    /// `buffer` is sized exactly to [`Graph::neighbor_count`].
    fn neighbors(&self, node: NodeId, buffer: &mut [NodeId]);

    /// Returns the weight of the edge `(from, to)`.
    ///
    /// Callers only ask for edges reported by [`Graph::neighbors`].
    fn edge_weight(&self, from: NodeId, to: NodeId) -> f32;
}

/// Errors raised while building a graph.
#[derive(Debug, Error, PartialEq)]
pub enum GraphError {
    /// The reserved "no node" identifier was used as an endpoint.
    #[error("edge {from} -> {to} uses the reserved NO_ID identifier")]
    ReservedNodeId { from: NodeId, to: NodeId },

    /// Edge weights must be finite numbers.
    #[error("edge {from} -> {to} has non-finite weight {weight}")]
    NonFiniteWeight { from: NodeId, to: NodeId, weight: f32 },

    /// Negative weights are not supported.
    #[error("edge {from} -> {to} has negative weight {weight}")]
    NegativeWeight { from: NodeId, to: NodeId, weight: f32 },
}

/// Represents a directed graph.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyGraph {
    /// Outgoing edges of every node, in insertion order.
    routes: HashMap<NodeId, Vec<(NodeId, OrderedFloat<f32>)>>,
    edge_count: usize,
}

impl AdjacencyGraph {
    /// Creates an empty graph.
    pub fn new() -> AdjacencyGraph {
        AdjacencyGraph::default()
    }

    /// Creates a graph holding the given edges.
    ///
    /// # Errors
    /// The first edge rejected by [`AdjacencyGraph::add_edge`].
    pub fn from_edges(edges: &[Edge]) -> Result<AdjacencyGraph, GraphError> {
        let mut graph = AdjacencyGraph::new();
        for edge in edges {
            graph.add_edge(edge.from, edge.to, edge.cost.into_inner())?;
        }
        Ok(graph)
    }

    /// Creates a new graph by trying to connect every node to every
    /// other node.
    ///
    /// For example, if the constraint represents the max travel
    /// distance of a vehicle, we only want to connect nodes that are
    /// within the max travel distance.
    ///
    /// # Arguments
    /// * `nodes` - The nodes of the graph. Every node is added, even
    ///   the ones left without any edge.
    /// * `constraint` - Only nodes within a constraint can be
    ///   connected.
    /// * `constraint_function` - A function that takes two nodes and
    ///   returns a float to compare against `constraint`.
    /// * `cost_function` - A function that computes the weight of the
    ///   edge between two nodes.
    ///
    /// # Time Complexity
    /// *O*(*n^2*) calls to `constraint_function`.
    pub fn connect(
        nodes: &[NodeId],
        constraint: f32,
        constraint_function: fn(NodeId, NodeId) -> f32,
        cost_function: fn(NodeId, NodeId) -> f32,
    ) -> Result<AdjacencyGraph, GraphError> {
        let mut graph = AdjacencyGraph::new();
        for node in nodes {
            graph.add_node(*node)?;
        }
        for edge in build_edges(nodes, constraint, constraint_function, cost_function) {
            graph.add_edge(edge.from, edge.to, edge.cost.into_inner())?;
        }
        Ok(graph)
    }

    /// Adds a node without any edge. Adding a known node does nothing.
    pub fn add_node(&mut self, node: NodeId) -> Result<(), GraphError> {
        if node.is_none() {
            return Err(GraphError::ReservedNodeId {
                from: node,
                to: node,
            });
        }
        self.routes.entry(node).or_default();
        Ok(())
    }

    /// Adds the directed edge `(from, to)`, adding both endpoints as
    /// needed.
    ///
    /// If the edge already exists its weight is replaced, so the graph
    /// never holds parallel edges.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: f32) -> Result<(), GraphError> {
        if from.is_none() || to.is_none() {
            return Err(GraphError::ReservedNodeId { from, to });
        }
        if !weight.is_finite() {
            return Err(GraphError::NonFiniteWeight { from, to, weight });
        }
        if weight < 0.0 {
            return Err(GraphError::NegativeWeight { from, to, weight });
        }

        self.routes.entry(to).or_default();
        let neighbors = self.routes.entry(from).or_default();
        match neighbors.iter_mut().find(|(neighbor, _)| *neighbor == to) {
            Some((_, cost)) => *cost = OrderedFloat(weight),
            None => {
                neighbors.push((to, OrderedFloat(weight)));
                self.edge_count += 1;
            }
        }
        Ok(())
    }

    /// Returns true if `node` belongs to the graph.
    pub fn contains_node(&self, node: NodeId) -> bool {
        self.routes.contains_key(&node)
    }

    /// Returns the number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.routes.len()
    }

    /// Returns the number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}

impl Graph for AdjacencyGraph {
    fn neighbor_count(&self, node: NodeId) -> usize {
        self.routes.get(&node).map_or(0, Vec::len)
    }

    fn neighbors(&self, node: NodeId, buffer: &mut [NodeId]) {
        if let Some(neighbors) = self.routes.get(&node) {
            for (slot, (neighbor, _)) in buffer.iter_mut().zip(neighbors) {
                *slot = *neighbor;
            }
        }
    }

    /// Unknown edges weigh `f32::INFINITY`, which never relaxes
    /// anything.
    fn edge_weight(&self, from: NodeId, to: NodeId) -> f32 {
        self.routes
            .get(&from)
            .and_then(|neighbors| neighbors.iter().find(|(neighbor, _)| *neighbor == to))
            .map_or(f32::INFINITY, |(_, cost)| cost.into_inner())
    }
}

//------------------------------------------------------------------
// Unit Tests
//------------------------------------------------------------------

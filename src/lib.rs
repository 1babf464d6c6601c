//! Shortest Path Search Library.
//! Finds the shortest path between two nodes of a weighted directed
//! graph.
//!
//! The search works on anything implementing [`Graph`]. Two graphs are
//! provided: [`AdjacencyGraph`], a plain adjacency map, and
//! [`Router`](router::engine::Router), backed by petgraph.
//!
//! ```
//! use pathfinder::{search, AdjacencyGraph, Edge, NodeId};
//!
//! let [s, a, t] = [0, 1, 2].map(|raw| NodeId::new(raw).unwrap());
//! let graph = AdjacencyGraph::from_edges(&[
//!     Edge::new(s, a, 1.0),
//!     Edge::new(a, t, 2.0),
//!     Edge::new(s, t, 5.0),
//! ])
//! .unwrap();
//!
//! let result = search(&graph, s, t);
//! assert_eq!(result.distance, 3.0);
//! assert_eq!(result.nodes(), vec![s, a, t]);
//! ```

#[macro_use]
extern crate log;

pub mod types {
    pub mod edge;
    pub mod node;
    pub mod record_set;
    pub mod router;
}

pub mod algorithms {
    pub mod dijkstra;
    pub mod graph;
}

pub mod utils {
    pub mod generator;
    pub mod graph;
}

pub use algorithms::dijkstra::{search, search_with, SearchOptions, SearchResult};
pub use algorithms::graph::{AdjacencyGraph, Graph, GraphError};
pub use types::{edge, node, record_set, router};
pub use types::{edge::Edge, node::NodeId, node::NodeRecord, record_set::NodeRecordSet};

//! # pathgraph
//!
//! A mutable weighted graph with stable ids, plus four path searches that
//! share one result type.
//!
//! ## Core Principles
//!
//! - **Stable Identity**: node and edge ids are recycled, never reshuffled
//! - **Weights Everywhere**: nodes and edges both carry cost, base plus dynamic
//! - **No Surprises**: searches never panic or error, an empty [`Path`] means "not found"
//! - **Explicit Ownership**: callers own the [`Graph`]; there is no global instance
//!
//! ## Architecture
//!
//! ```text
//! Presentation layer (positions, rendering)
//!     ↓
//! Geometry (PositionProvider, heuristics, derived weights)
//!     ↓
//! Search (DFS, BFS, Dijkstra, A*) → Path
//!     ↓
//! Core Graph (nodes, edges, id pools)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use pathgraph::{dijkstra_search, EdgeDirection, Graph};
//!
//! let mut graph = Graph::new();
//! let a = graph.add_node(0);
//! let b = graph.add_node(0);
//! let c = graph.add_node(0);
//!
//! graph.connect_nodes(a, b, EdgeDirection::Straight, 1).unwrap();
//! graph.connect_nodes(b, c, EdgeDirection::Straight, 1).unwrap();
//! graph.connect_nodes(a, c, EdgeDirection::Straight, 10).unwrap();
//!
//! let path = dijkstra_search(a, c, &graph);
//! assert_eq!(path.node_ids(), vec![a, b, c]);
//! assert_eq!(path.total_weight(), 2);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod export;
pub mod geometry;
pub mod graph;
pub mod path;
pub mod search;

// Re-export main types
pub use error::{GraphError, Result};
pub use geometry::{derive_edge_weights, EuclideanHeuristic, Point, PositionMap, PositionProvider};
pub use graph::{
    DataHandle, Edge, EdgeDirection, EdgeId, EdgeInfo, Graph, Node, NodeId, Weight, Weighted,
    INVALID_ID,
};
pub use path::Path;
pub use search::{
    astar_search, astar_search_with, breadth_first_search, depth_first_search, dijkstra_search,
    AStar, BreadthFirst, DepthFirst, Dijkstra, Heuristic, PathSearch, SearchStrategy,
    Termination, ZeroHeuristic,
};

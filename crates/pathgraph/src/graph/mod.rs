//! Core graph types and operations.
//!
//! This module defines the fundamental building blocks:
//! - [`Node`] and [`Edge`]: weighted entities with stable ids
//! - [`EdgeInfo`]: adjacency entries cached on nodes
//! - [`Graph`]: the container owning both and allocating ids

mod container;
mod ids;
mod types;

pub use container::Graph;
pub use ids::IdPool;
pub use types::{
    DataHandle, Edge, EdgeDirection, EdgeId, EdgeInfo, Node, NodeId, Weight, Weighted, Weights,
    INVALID_ID,
};

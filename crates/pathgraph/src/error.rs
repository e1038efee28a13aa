//! Error types for graph mutation and export.
//!
//! Searches never fail: they return an empty [`Path`](crate::Path) instead.
//! Everything that changes the graph or crosses an I/O boundary returns
//! [`Result<T>`].

use crate::graph::{EdgeId, NodeId};
use thiserror::Error;

/// Result type alias for pathgraph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Error type for all fallible graph operations.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Node not found in the graph
    #[error("Node not found: {node_id}")]
    NodeNotFound {
        /// ID of the missing node
        node_id: NodeId,
    },

    /// Edge not found in the graph
    #[error("Edge not found: {edge_id}")]
    EdgeNotFound {
        /// ID of the missing edge
        edge_id: EdgeId,
    },

    /// A node with an explicitly requested id already exists
    #[error("Node id already in use: {node_id}")]
    DuplicateNode {
        /// The occupied id
        node_id: NodeId,
    },

    /// An edge with an explicitly requested id already exists
    #[error("Edge id already in use: {edge_id}")]
    DuplicateEdge {
        /// The occupied id
        edge_id: EdgeId,
    },

    /// An edge was requested from a node to itself
    #[error("Cannot connect node {node_id} to itself")]
    SelfLoop {
        /// The node on both ends
        node_id: NodeId,
    },

    /// Unrecognized edge direction code or name
    #[error("Invalid edge direction: {value}")]
    InvalidDirection {
        /// The rejected input, as given
        value: String,
    },

    /// Invalid operation (e.g., unknown strategy name)
    #[error("Invalid operation: {message}")]
    InvalidOperation {
        /// Description of what went wrong
        message: String,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error details
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// File I/O error during snapshot save/load
    #[error("I/O error: {message}")]
    Io {
        /// Error details
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl GraphError {
    /// Create a serialization error from a message and optional source.
    pub fn serialization<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Serialization {
            message: message.into(),
            source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }

    /// Create an I/O error from a message and optional source.
    pub fn io<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Io {
            message: message.into(),
            source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }
}

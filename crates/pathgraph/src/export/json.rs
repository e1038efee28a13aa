//! JSON snapshots of a graph.
//!
//! A snapshot keeps ids, weights, data handles, adjacency order and the id
//! pools, so a restored graph searches and allocates exactly like the
//! graph it was taken from.

use crate::error::{GraphError, Result};
use crate::graph::{
    DataHandle, EdgeDirection, EdgeId, Graph, IdPool, NodeId, Weighted, Weights,
};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::Path as FsPath;

/// Serializable form of a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    /// Node id
    pub id: NodeId,
    /// Weights and enable flag
    pub weights: Weights,
    /// Presentation handle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<DataHandle>,
    /// Outgoing edge ids in adjacency order
    #[serde(default)]
    pub adjacency: Vec<EdgeId>,
}

/// Serializable form of an edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    /// Edge id
    pub id: EdgeId,
    /// Start node
    pub head: NodeId,
    /// End node
    pub tail: NodeId,
    /// Stored direction
    pub direction: EdgeDirection,
    /// Weights and enable flag
    pub weights: Weights,
}

/// Complete serializable state of a [`Graph`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    /// Nodes in ascending id order
    pub nodes: Vec<NodeRecord>,
    /// Edges in ascending id order
    pub edges: Vec<EdgeRecord>,
    /// Node id allocator state
    #[serde(default)]
    pub node_ids: IdPool,
    /// Edge id allocator state
    #[serde(default)]
    pub edge_ids: IdPool,
}

/// Capture the state of `graph`.
pub fn snapshot(graph: &Graph) -> GraphSnapshot {
    let nodes = graph
        .node_ids()
        .into_iter()
        .filter_map(|id| graph.node(id))
        .map(|node| NodeRecord {
            id: node.id(),
            weights: node.weights().clone(),
            data: node.data(),
            adjacency: node.edges().map(|info| info.id).collect(),
        })
        .collect();

    let edges = graph
        .edge_ids()
        .into_iter()
        .filter_map(|id| graph.edge(id))
        .map(|edge| EdgeRecord {
            id: edge.id(),
            head: edge.head(),
            tail: edge.tail(),
            direction: edge.direction(),
            weights: edge.weights().clone(),
        })
        .collect();

    let (node_ids, edge_ids) = graph.id_pools();
    GraphSnapshot {
        nodes,
        edges,
        node_ids: node_ids.clone(),
        edge_ids: edge_ids.clone(),
    }
}

impl Graph {
    /// Rebuild a graph from a snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot repeats an id, references a missing
    /// node, contains a self-loop, or carries an exhausted id pool.
    pub fn from_snapshot(snapshot: &GraphSnapshot) -> Result<Self> {
        let mut graph = Graph::new();
        for record in &snapshot.nodes {
            graph.restore_node(record.id, record.weights.clone(), record.data)?;
        }
        for record in &snapshot.edges {
            graph.restore_edge(
                record.id,
                record.head,
                record.tail,
                record.direction,
                record.weights.clone(),
            )?;
        }
        for record in &snapshot.nodes {
            if let Some(node) = graph.node_mut(record.id) {
                node.reorder_edges(&record.adjacency);
            }
        }
        graph.set_id_pools(
            snapshot.node_ids.clone().sanitized()?,
            snapshot.edge_ids.clone().sanitized()?,
        );

        debug!(
            "Restored graph: {} nodes, {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        Ok(graph)
    }
}

/// Serialize `graph` to pretty-printed JSON.
pub fn export_json(graph: &Graph) -> Result<String> {
    serde_json::to_string_pretty(&snapshot(graph))
        .map_err(|e| GraphError::serialization("Failed to serialize graph", Some(e)))
}

/// Parse a graph from JSON produced by [`export_json`].
pub fn import_json(json: &str) -> Result<Graph> {
    let snapshot: GraphSnapshot = serde_json::from_str(json)
        .map_err(|e| GraphError::serialization("Failed to deserialize graph", Some(e)))?;
    Graph::from_snapshot(&snapshot)
}

/// Write `graph` as JSON to `path`.
pub fn save_json<P: AsRef<FsPath>>(graph: &Graph, path: P) -> Result<()> {
    let path = path.as_ref();
    info!("Saving graph to {path:?}");
    let json = export_json(graph)?;
    std::fs::write(path, json)
        .map_err(|e| GraphError::io(format!("Failed to write {}", path.display()), Some(e)))
}

/// Read a graph from a JSON file written by [`save_json`].
pub fn load_json<P: AsRef<FsPath>>(path: P) -> Result<Graph> {
    let path = path.as_ref();
    info!("Loading graph from {path:?}");
    let json = std::fs::read_to_string(path)
        .map_err(|e| GraphError::io(format!("Failed to read {}", path.display()), Some(e)))?;
    import_json(&json)
}

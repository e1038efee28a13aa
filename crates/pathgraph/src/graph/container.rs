//! The `Graph` container: owns nodes and edges, allocates ids, wires adjacency.

use super::ids::IdPool;
use super::types::{
    DataHandle, Edge, EdgeDirection, EdgeId, Node, NodeId, Weight, Weighted, Weights, INVALID_ID,
};
use crate::error::{GraphError, Result};
use log::{debug, trace};
use std::collections::HashMap;

/// A mutable weighted graph with stable, recyclable ids.
///
/// Node ids and edge ids live in separate spaces, both starting at 1.
/// Searches borrow the graph immutably; every mutation goes through
/// `&mut self`, so a search never observes a half-applied change.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: HashMap<NodeId, Node>,
    edges: HashMap<EdgeId, Edge>,
    node_ids: IdPool,
    edge_ids: IdPool,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node with a freshly allocated id.
    pub fn add_node(&mut self, weight: Weight) -> NodeId {
        self.add_node_with_data(weight, None)
    }

    /// Add a node carrying a presentation-layer handle.
    pub fn add_node_with_data(&mut self, weight: Weight, data: Option<DataHandle>) -> NodeId {
        let id = self.allocate_node_id();
        self.store_node(Node::new(id, weight, data));
        id
    }

    /// Add a node under an explicit id.
    ///
    /// An `id` of [`INVALID_ID`] allocates one from the pool instead.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateNode`] if `id` is already in use.
    pub fn insert_node(
        &mut self,
        id: NodeId,
        weight: Weight,
        data: Option<DataHandle>,
    ) -> Result<NodeId> {
        if self.nodes.contains_key(&id) {
            return Err(GraphError::DuplicateNode { node_id: id });
        }
        let id = if id == INVALID_ID {
            self.allocate_node_id()
        } else {
            id
        };
        self.store_node(Node::new(id, weight, data));
        Ok(id)
    }

    /// Connect two nodes with a new edge.
    ///
    /// `Reverse` is stored as `Straight` from `second` to `first`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if an endpoint is missing and
    /// [`GraphError::SelfLoop`] if `first == second`.
    pub fn connect_nodes(
        &mut self,
        first: NodeId,
        second: NodeId,
        direction: EdgeDirection,
        weight: Weight,
    ) -> Result<EdgeId> {
        self.check_endpoints(first, second)?;

        let id = self.allocate_edge_id();
        let edge = Edge::new(id, first, second, direction, weight);
        debug!(
            "Connecting nodes: edge={id}, head={}, tail={}, direction={}",
            edge.head(),
            edge.tail(),
            edge.direction()
        );
        self.register(&edge);
        self.edges.insert(id, edge);
        Ok(id)
    }

    /// Connect two nodes using a numeric direction code (1, 2 or 3).
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidDirection`] for any other code, plus the
    /// errors of [`Graph::connect_nodes`].
    pub fn connect_nodes_raw(
        &mut self,
        first: NodeId,
        second: NodeId,
        direction: u8,
        weight: Weight,
    ) -> Result<EdgeId> {
        let direction = EdgeDirection::try_from(direction)?;
        self.connect_nodes(first, second, direction, weight)
    }

    /// Move an existing edge onto new endpoints, optionally changing its direction.
    ///
    /// The edge keeps its id and weights.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EdgeNotFound`] for an unknown edge, otherwise
    /// the errors of [`Graph::connect_nodes`].
    pub fn reconnect_edge(
        &mut self,
        id: EdgeId,
        head: NodeId,
        tail: NodeId,
        direction: Option<EdgeDirection>,
    ) -> Result<()> {
        if !self.edges.contains_key(&id) {
            return Err(GraphError::EdgeNotFound { edge_id: id });
        }
        self.check_endpoints(head, tail)?;

        self.disconnect(id);
        if let Some(edge) = self.edges.get_mut(&id) {
            edge.rebind(head, tail, direction);
        }
        if let Some(edge) = self.edges.get(&id) {
            debug!(
                "Reconnected edge {id}: head={}, tail={}, direction={}",
                edge.head(),
                edge.tail(),
                edge.direction()
            );
            let edge = edge.clone();
            self.register(&edge);
        }
        Ok(())
    }

    /// Remove an edge, detaching it from every adjacency list.
    ///
    /// Unknown ids are ignored. The endpoints stay in the graph.
    pub fn remove_edge(&mut self, id: EdgeId) -> Option<Edge> {
        if !self.edges.contains_key(&id) {
            return None;
        }
        debug!("Removing edge: id={id}");
        self.disconnect(id);
        let edge = self.edges.remove(&id)?;
        self.edge_ids.release(id);
        Some(edge)
    }

    /// Remove a node and every edge touching it.
    ///
    /// Unknown ids are ignored.
    pub fn remove_node(&mut self, id: NodeId) -> Option<Node> {
        if !self.nodes.contains_key(&id) {
            return None;
        }

        let mut attached: Vec<EdgeId> = self
            .edges
            .values()
            .filter(|edge| edge.touches(id))
            .map(Edge::id)
            .collect();
        attached.sort_unstable();

        debug!("Removing node: id={id}, attached edges={}", attached.len());
        for edge_id in attached {
            self.remove_edge(edge_id);
        }

        let node = self.nodes.remove(&id)?;
        self.node_ids.release(id);
        Some(node)
    }

    /// Look up a node.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Look up a node for weight or data changes.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(&id)
    }

    /// Look up an edge.
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(&id)
    }

    /// Look up an edge for weight changes.
    pub fn edge_mut(&mut self, id: EdgeId) -> Option<&mut Edge> {
        self.edges.get_mut(&id)
    }

    /// Whether a node with `id` exists.
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Whether an edge with `id` exists.
    pub fn contains_edge(&self, id: EdgeId) -> bool {
        self.edges.contains_key(&id)
    }

    /// All nodes, in no particular order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// All edges, in no particular order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    /// Node ids in ascending order.
    pub fn node_ids(&self) -> Vec<NodeId> {
        let mut ids: Vec<_> = self.nodes.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Edge ids in ascending order.
    pub fn edge_ids(&self) -> Vec<EdgeId> {
        let mut ids: Vec<_> = self.edges.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Edges that let `from` step directly to `to`.
    pub fn edges_between(&self, from: NodeId, to: NodeId) -> Vec<EdgeId> {
        self.nodes
            .get(&from)
            .map(|node| {
                node.edges()
                    .filter(|info| info.tail == to)
                    .map(|info| info.id)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Get the total number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the total number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Drop all nodes and edges and reset both id pools.
    pub fn clear(&mut self) {
        debug!(
            "Clearing graph: {} nodes, {} edges",
            self.nodes.len(),
            self.edges.len()
        );
        self.nodes.clear();
        self.edges.clear();
        self.node_ids.reset();
        self.edge_ids.reset();
    }

    // Snapshot support

    pub(crate) fn id_pools(&self) -> (&IdPool, &IdPool) {
        (&self.node_ids, &self.edge_ids)
    }

    pub(crate) fn set_id_pools(&mut self, node_ids: IdPool, edge_ids: IdPool) {
        self.node_ids = node_ids;
        self.edge_ids = edge_ids;
    }

    pub(crate) fn restore_node(
        &mut self,
        id: NodeId,
        weights: Weights,
        data: Option<DataHandle>,
    ) -> Result<()> {
        if id == INVALID_ID || self.nodes.contains_key(&id) {
            return Err(GraphError::DuplicateNode { node_id: id });
        }
        let mut node = Node::new(id, 0, data);
        *node.weights_mut() = weights;
        self.nodes.insert(id, node);
        Ok(())
    }

    pub(crate) fn restore_edge(
        &mut self,
        id: EdgeId,
        head: NodeId,
        tail: NodeId,
        direction: EdgeDirection,
        weights: Weights,
    ) -> Result<()> {
        if id == INVALID_ID || self.edges.contains_key(&id) {
            return Err(GraphError::DuplicateEdge { edge_id: id });
        }
        self.check_endpoints(head, tail)?;

        let mut edge = Edge::new(id, head, tail, direction, 0);
        *edge.weights_mut() = weights;
        self.register(&edge);
        self.edges.insert(id, edge);
        Ok(())
    }

    // Private helper methods

    fn store_node(&mut self, node: Node) {
        debug!("Adding node: id={}", node.id());
        self.nodes.insert(node.id(), node);
    }

    fn allocate_node_id(&mut self) -> NodeId {
        let nodes = &self.nodes;
        self.node_ids.allocate(|id| nodes.contains_key(&id))
    }

    fn allocate_edge_id(&mut self) -> EdgeId {
        let edges = &self.edges;
        self.edge_ids.allocate(|id| edges.contains_key(&id))
    }

    fn check_endpoints(&self, first: NodeId, second: NodeId) -> Result<()> {
        if !self.nodes.contains_key(&first) {
            return Err(GraphError::NodeNotFound { node_id: first });
        }
        if !self.nodes.contains_key(&second) {
            return Err(GraphError::NodeNotFound { node_id: second });
        }
        if first == second {
            return Err(GraphError::SelfLoop { node_id: first });
        }
        Ok(())
    }

    fn register(&mut self, edge: &Edge) {
        for info in edge.registrations() {
            if let Some(node) = self.nodes.get_mut(&info.head) {
                node.add_edge(info);
            }
        }
    }

    fn disconnect(&mut self, id: EdgeId) {
        let Some(edge) = self.edges.get(&id) else {
            return;
        };
        let (head, tail) = (edge.head(), edge.tail());
        for node_id in [head, tail] {
            if let Some(node) = self.nodes.get_mut(&node_id) {
                if node.remove_edge(id).is_some() {
                    trace!("Detached edge {id} from node {node_id}");
                }
            }
        }
    }
}

//! Core graph types: ids, weights, directions, nodes and edges.

use crate::error::GraphError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a node. Zero is never assigned.
pub type NodeId = u64;

/// Unique identifier for an edge. Zero is never assigned.
pub type EdgeId = u64;

/// Cost unit used by nodes, edges, paths and searches.
pub type Weight = u64;

/// The reserved "no id" value shared by both id spaces.
pub const INVALID_ID: u64 = 0;

/// Opaque handle to presentation-layer data attached to a node.
///
/// The engine stores it and hands it back; it never interprets the value.
/// A [`PositionProvider`](crate::geometry::PositionProvider) resolves it to a
/// coordinate when geometry is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DataHandle(pub u64);

/// Which endpoint(s) of an edge can start a traversal along it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeDirection {
    /// Head reaches tail
    Straight,
    /// Tail reaches head; stored as `Straight` with the endpoints swapped
    Reverse,
    /// Both endpoints reach each other
    Mutual,
}

impl EdgeDirection {
    /// Numeric code of the direction (1, 2, 3).
    pub fn code(self) -> u8 {
        match self {
            EdgeDirection::Straight => 1,
            EdgeDirection::Reverse => 2,
            EdgeDirection::Mutual => 3,
        }
    }

    /// Swap `Reverse` into `Straight`, exchanging the endpoints.
    pub fn normalize(self, head: NodeId, tail: NodeId) -> (EdgeDirection, NodeId, NodeId) {
        match self {
            EdgeDirection::Reverse => (EdgeDirection::Straight, tail, head),
            other => (other, head, tail),
        }
    }
}

impl TryFrom<u8> for EdgeDirection {
    type Error = GraphError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(EdgeDirection::Straight),
            2 => Ok(EdgeDirection::Reverse),
            3 => Ok(EdgeDirection::Mutual),
            other => Err(GraphError::InvalidDirection {
                value: other.to_string(),
            }),
        }
    }
}

impl FromStr for EdgeDirection {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "straight" | "forward" | "->" => Ok(EdgeDirection::Straight),
            "reverse" | "backward" | "<-" => Ok(EdgeDirection::Reverse),
            "mutual" | "both" | "<->" => Ok(EdgeDirection::Mutual),
            _ => Err(GraphError::InvalidDirection {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for EdgeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeDirection::Straight => write!(f, "Straight"),
            EdgeDirection::Reverse => write!(f, "Reverse"),
            EdgeDirection::Mutual => write!(f, "Mutual"),
        }
    }
}

/// Weight and enable state shared by nodes and edges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weights {
    enabled: bool,
    base: Weight,
    dynamic: Weight,
}

impl Weights {
    /// Create weights with the given base and no dynamic part.
    pub fn new(base: Weight) -> Self {
        Self {
            enabled: true,
            base,
            dynamic: 0,
        }
    }
}

impl Default for Weights {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Common weight API of [`Node`] and [`Edge`].
///
/// The effective weight is `base + dynamic`. The dynamic part is meant for
/// runtime adjustments (congestion, penalties) and never drops below zero.
pub trait Weighted {
    /// Access the weight record.
    fn weights(&self) -> &Weights;

    /// Mutable access to the weight record.
    fn weights_mut(&mut self) -> &mut Weights;

    /// Effective weight consumed by searches.
    fn weight(&self) -> Weight {
        let w = self.weights();
        w.base.saturating_add(w.dynamic)
    }

    /// Statically configured part of the weight.
    fn base_weight(&self) -> Weight {
        self.weights().base
    }

    /// Runtime-accumulated part of the weight.
    fn dynamic_weight(&self) -> Weight {
        self.weights().dynamic
    }

    /// Replace the base weight.
    fn set_base_weight(&mut self, weight: Weight) {
        self.weights_mut().base = weight;
    }

    /// Replace the base weight from a signed value; negative input is ignored.
    fn set_base_weight_signed(&mut self, weight: i64) {
        if let Ok(weight) = Weight::try_from(weight) {
            self.set_base_weight(weight);
        }
    }

    /// Grow the dynamic weight. A negative delta subtracts instead.
    fn add_weight(&mut self, delta: i64) {
        if delta < 0 {
            self.subtract_weight(delta);
        } else {
            let w = self.weights_mut();
            w.dynamic = w.dynamic.saturating_add(delta.unsigned_abs());
        }
    }

    /// Shrink the dynamic weight by `|delta|`, clamping at zero.
    fn subtract_weight(&mut self, delta: i64) {
        let w = self.weights_mut();
        w.dynamic = w.dynamic.saturating_sub(delta.unsigned_abs());
    }

    /// Whether the entity is enabled. Searches do not consult this flag.
    fn is_enabled(&self) -> bool {
        self.weights().enabled
    }

    /// Mark the entity enabled.
    fn enable(&mut self) {
        self.weights_mut().enabled = true;
    }

    /// Mark the entity disabled.
    fn disable(&mut self) {
        self.weights_mut().enabled = false;
    }
}

/// Adjacency entry cached on a node: from `head`, along edge `id`, reach `tail`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeInfo {
    /// Edge traversed
    pub id: EdgeId,
    /// Node the step starts at
    pub head: NodeId,
    /// Node the step arrives at
    pub tail: NodeId,
}

impl EdgeInfo {
    /// Create an adjacency entry.
    pub fn new(id: EdgeId, head: NodeId, tail: NodeId) -> Self {
        Self { id, head, tail }
    }
}

/// A graph vertex.
///
/// Holds its outgoing adjacency in insertion order, keyed by edge id; that
/// order decides which branch DFS and BFS try first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    id: NodeId,
    weights: Weights,
    edges: IndexMap<EdgeId, EdgeInfo>,
    data: Option<DataHandle>,
}

impl Node {
    /// Create a detached node. Nodes normally come from [`Graph::add_node`](crate::Graph::add_node).
    pub fn new(id: NodeId, weight: Weight, data: Option<DataHandle>) -> Self {
        Self {
            id,
            weights: Weights::new(weight),
            edges: IndexMap::new(),
            data,
        }
    }

    /// The node's id.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Presentation-layer handle, if any.
    pub fn data(&self) -> Option<DataHandle> {
        self.data
    }

    /// Attach or clear the presentation-layer handle.
    pub fn set_data(&mut self, data: Option<DataHandle>) {
        self.data = data;
    }

    /// Outgoing adjacency in registration order.
    pub fn edges(&self) -> impl ExactSizeIterator<Item = &EdgeInfo> + DoubleEndedIterator + '_ {
        self.edges.values()
    }

    /// Adjacency entry at `index` in registration order.
    pub fn edge_at(&self, index: usize) -> Option<&EdgeInfo> {
        self.edges.get_index(index).map(|(_, info)| info)
    }

    /// Adjacency entry for `edge_id`, if registered here.
    pub fn edge_info(&self, edge_id: EdgeId) -> Option<&EdgeInfo> {
        self.edges.get(&edge_id)
    }

    /// Whether `edge_id` is registered on this node.
    pub fn has_edge(&self, edge_id: EdgeId) -> bool {
        self.edges.contains_key(&edge_id)
    }

    /// Number of outgoing adjacency entries.
    pub fn degree(&self) -> usize {
        self.edges.len()
    }

    /// Register an adjacency entry. Id 0 and already-registered ids are ignored.
    pub(crate) fn add_edge(&mut self, info: EdgeInfo) -> bool {
        if info.id == INVALID_ID || self.has_edge(info.id) {
            return false;
        }
        self.edges.insert(info.id, info);
        true
    }

    /// Drop the adjacency entry for `edge_id`, if present.
    pub(crate) fn remove_edge(&mut self, edge_id: EdgeId) -> Option<EdgeInfo> {
        self.edges.shift_remove(&edge_id)
    }

    /// Reorder adjacency to follow `order`; ids not listed keep their relative order at the end.
    pub(crate) fn reorder_edges(&mut self, order: &[EdgeId]) {
        let ranks: HashMap<EdgeId, usize> =
            order.iter().enumerate().map(|(rank, &id)| (id, rank)).collect();
        let rank = |id: &EdgeId| ranks.get(id).copied().unwrap_or(order.len());
        self.edges.sort_by(|a, _, b, _| rank(a).cmp(&rank(b)));
    }
}

impl Weighted for Node {
    fn weights(&self) -> &Weights {
        &self.weights
    }

    fn weights_mut(&mut self) -> &mut Weights {
        &mut self.weights
    }
}

/// A connection between two nodes.
///
/// `head` and `tail` name nodes owned by the same [`Graph`](crate::Graph).
/// The stored direction is always `Straight` or `Mutual`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    id: EdgeId,
    weights: Weights,
    head: NodeId,
    tail: NodeId,
    direction: EdgeDirection,
}

impl Edge {
    /// Create an edge, normalizing `Reverse` into a swapped `Straight`.
    pub fn new(
        id: EdgeId,
        head: NodeId,
        tail: NodeId,
        direction: EdgeDirection,
        weight: Weight,
    ) -> Self {
        let (direction, head, tail) = direction.normalize(head, tail);
        Self {
            id,
            weights: Weights::new(weight),
            head,
            tail,
            direction,
        }
    }

    /// The edge's id.
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// Node the edge starts at.
    pub fn head(&self) -> NodeId {
        self.head
    }

    /// Node the edge ends at.
    pub fn tail(&self) -> NodeId {
        self.tail
    }

    /// Stored direction (`Straight` or `Mutual`).
    pub fn direction(&self) -> EdgeDirection {
        self.direction
    }

    /// Whether both endpoints can traverse the edge.
    pub fn is_mutual(&self) -> bool {
        self.direction == EdgeDirection::Mutual
    }

    /// Whether `node` is one of the endpoints.
    pub fn touches(&self, node: NodeId) -> bool {
        self.head == node || self.tail == node
    }

    /// Adjacency entries this edge registers, keyed by the node that owns each.
    pub fn registrations(&self) -> Vec<EdgeInfo> {
        let mut infos = vec![EdgeInfo::new(self.id, self.head, self.tail)];
        if self.is_mutual() {
            infos.push(EdgeInfo::new(self.id, self.tail, self.head));
        }
        infos
    }

    /// Rebind endpoints and optionally the direction.
    pub(crate) fn rebind(&mut self, head: NodeId, tail: NodeId, direction: Option<EdgeDirection>) {
        let requested = direction.unwrap_or(self.direction);
        let (direction, head, tail) = requested.normalize(head, tail);
        self.head = head;
        self.tail = tail;
        self.direction = direction;
    }
}

impl Weighted for Edge {
    fn weights(&self) -> &Weights {
        &self.weights
    }

    fn weights_mut(&mut self) -> &mut Weights {
        &mut self.weights
    }
}

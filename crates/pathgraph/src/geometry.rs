//! Boundary with the presentation layer: node positions and geometric weights.
//!
//! The engine never knows where a node is drawn. Callers that want
//! distance-based A* estimates or distance-based edge weights supply a
//! [`PositionProvider`] that maps a node's [`DataHandle`] to a [`Point`].

use crate::graph::{DataHandle, Graph, NodeId, Weight, Weighted};
use crate::search::Heuristic;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A 2D coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Create a point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to `other`.
    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Resolves a node's presentation handle to a position.
pub trait PositionProvider {
    /// Position for `data`, if known.
    fn position(&self, data: DataHandle) -> Option<Point>;
}

/// In-memory [`PositionProvider`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PositionMap {
    positions: HashMap<DataHandle, Point>,
}

impl PositionMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the position of `data`, returning the previous one.
    pub fn insert(&mut self, data: DataHandle, point: Point) -> Option<Point> {
        self.positions.insert(data, point)
    }

    /// Forget the position of `data`.
    pub fn remove(&mut self, data: DataHandle) -> Option<Point> {
        self.positions.remove(&data)
    }

    /// Number of known positions.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether no positions are known.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl PositionProvider for PositionMap {
    fn position(&self, data: DataHandle) -> Option<Point> {
        self.positions.get(&data).copied()
    }
}

impl<P: PositionProvider + ?Sized> PositionProvider for &P {
    fn position(&self, data: DataHandle) -> Option<Point> {
        (**self).position(data)
    }
}

/// Position of a graph node, if it has data and the provider knows it.
pub fn node_position<P: PositionProvider + ?Sized>(
    graph: &Graph,
    provider: &P,
    node: NodeId,
) -> Option<Point> {
    let data = graph.node(node)?.data()?;
    provider.position(data)
}

/// Distance truncated to a whole weight.
fn truncate(distance: f64) -> Weight {
    if distance.is_finite() && distance > 0.0 {
        distance as Weight
    } else {
        0
    }
}

/// A* estimate from straight-line distance between node positions.
///
/// Admissible as long as every edge weighs at least the distance between
/// its endpoints, which [`derive_edge_weights`] guarantees. Nodes without a
/// known position estimate 0.
#[derive(Debug, Clone, Default)]
pub struct EuclideanHeuristic<P> {
    provider: P,
}

impl<P: PositionProvider> EuclideanHeuristic<P> {
    /// Create a heuristic over `provider`.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// The underlying provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }
}

impl<P: PositionProvider> Heuristic for EuclideanHeuristic<P> {
    fn estimate(&self, graph: &Graph, from: NodeId, to: NodeId) -> Weight {
        match (
            node_position(graph, &self.provider, from),
            node_position(graph, &self.provider, to),
        ) {
            (Some(a), Some(b)) => truncate(a.distance(&b)),
            _ => 0,
        }
    }
}

/// Set each edge's base weight to the distance between its endpoints.
///
/// Weights are truncated and never fall below 1. Edges with an endpoint of
/// unknown position keep their weight. Returns how many edges were updated.
pub fn derive_edge_weights<P: PositionProvider + ?Sized>(graph: &mut Graph, provider: &P) -> usize {
    let updates: Vec<_> = graph
        .edges()
        .filter_map(|edge| {
            let head = node_position(graph, provider, edge.head())?;
            let tail = node_position(graph, provider, edge.tail())?;
            Some((edge.id(), truncate(head.distance(&tail)).max(1)))
        })
        .collect();

    let count = updates.len();
    for (edge_id, weight) in updates {
        if let Some(edge) = graph.edge_mut(edge_id) {
            edge.set_base_weight(weight);
        }
    }
    debug!("Derived base weights for {count} edges");
    count
}

//! The result type shared by every search.

use crate::graph::{Edge, EdgeId, EdgeInfo, Node, NodeId, Weight, Weighted};
use serde::{Deserialize, Serialize};

/// A contiguous walk through the graph plus its accumulated cost.
///
/// The cost of a path counts every edge and every node on it, the start
/// node included. An empty path means the search found nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    steps: Vec<EdgeInfo>,
    total_weight: Weight,
    iterations: usize,
}

impl Path {
    /// Create an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a path from `(head, tail, edge)` steps in travel order.
    pub fn from_steps<'a, I>(steps: I) -> Self
    where
        I: IntoIterator<Item = (&'a Node, &'a Node, &'a Edge)>,
    {
        let mut path = Self::new();
        for (head, tail, edge) in steps {
            path.append(head, tail, edge);
        }
        path
    }

    /// Append one step, charging the edge and the node it arrives at.
    ///
    /// The first step also charges the node it leaves from.
    pub fn append(&mut self, head: &Node, tail: &Node, edge: &Edge) {
        if self.steps.is_empty() {
            self.total_weight = self.total_weight.saturating_add(head.weight());
        }
        self.total_weight = self
            .total_weight
            .saturating_add(edge.weight())
            .saturating_add(tail.weight());
        self.steps.push(EdgeInfo::new(edge.id(), head.id(), tail.id()));
    }

    /// Record how many outer-loop iterations the search needed.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Sum of node and edge weights along the path.
    pub fn total_weight(&self) -> Weight {
        self.total_weight
    }

    /// Outer-loop iterations the producing search performed.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Steps in travel order.
    pub fn steps(&self) -> &[EdgeInfo] {
        &self.steps
    }

    /// Iterate over the steps in travel order.
    pub fn iter(&self) -> std::slice::Iter<'_, EdgeInfo> {
        self.steps.iter()
    }

    /// Number of edges traversed.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether no path was found.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Whether a path was found.
    pub fn is_found(&self) -> bool {
        !self.steps.is_empty()
    }

    /// First node of the walk.
    pub fn begin(&self) -> Option<NodeId> {
        self.steps.first().map(|step| step.head)
    }

    /// Last node of the walk.
    pub fn end(&self) -> Option<NodeId> {
        self.steps.last().map(|step| step.tail)
    }

    /// Visited node ids: the start, then each arrival.
    pub fn node_ids(&self) -> Vec<NodeId> {
        let mut ids = Vec::with_capacity(self.steps.len() + 1);
        if let Some(first) = self.steps.first() {
            ids.push(first.head);
        }
        ids.extend(self.steps.iter().map(|step| step.tail));
        ids
    }

    /// Whether the step containing `edge_id` is part of this path.
    pub fn contains_edge(&self, edge_id: EdgeId) -> bool {
        self.steps.iter().any(|step| step.id == edge_id)
    }

    /// Whether every step starts where the previous one ended.
    pub fn is_contiguous(&self) -> bool {
        self.steps.windows(2).all(|pair| pair[0].tail == pair[1].head)
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a EdgeInfo;
    type IntoIter = std::slice::Iter<'a, EdgeInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

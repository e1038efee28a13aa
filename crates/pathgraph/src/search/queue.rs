//! Min-priority queue over node ids with removal by id.

use crate::graph::{NodeId, Weight};
use std::collections::{BTreeSet, HashMap};

/// Priority queue ordered by ascending cost.
///
/// Entries with equal cost pop in insertion order. A node is queued at most
/// once; pushing it again replaces its previous entry.
#[derive(Debug, Default)]
pub(crate) struct CostQueue {
    order: BTreeSet<(Weight, u64, NodeId)>,
    index: HashMap<NodeId, (Weight, u64)>,
    seq: u64,
}

impl CostQueue {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Queue `node` at `cost`, replacing any existing entry for it.
    pub(crate) fn push(&mut self, node: NodeId, cost: Weight) {
        self.remove(node);
        let seq = self.seq;
        self.seq += 1;
        self.order.insert((cost, seq, node));
        self.index.insert(node, (cost, seq));
    }

    /// Take the cheapest entry.
    pub(crate) fn pop_min(&mut self) -> Option<(NodeId, Weight)> {
        let (cost, _, node) = self.order.pop_first()?;
        self.index.remove(&node);
        Some((node, cost))
    }

    pub(crate) fn contains(&self, node: NodeId) -> bool {
        self.index.contains_key(&node)
    }

    /// Drop the entry for `node`; returns whether one existed.
    pub(crate) fn remove(&mut self, node: NodeId) -> bool {
        match self.index.remove(&node) {
            Some((cost, seq)) => self.order.remove(&(cost, seq, node)),
            None => false,
        }
    }

    pub(crate) fn clear(&mut self) {
        self.order.clear();
        self.index.clear();
    }

    pub(crate) fn len(&self) -> usize {
        self.index.len()
    }
}

//! Dijkstra's shortest-path search with target-bound pruning.

use super::queue::CostQueue;
use super::{build_path, endpoints, PathSearch};
use crate::graph::{EdgeId, Graph, NodeId, Weight, Weighted};
use crate::path::Path;
use log::{debug, trace};
use std::collections::{HashMap, HashSet};

/// Cost standing in for "not reached yet".
pub(crate) const INFINITE_COST: Weight = Weight::MAX;

/// Dijkstra strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dijkstra;

impl PathSearch for Dijkstra {
    fn search(&self, begin: NodeId, end: NodeId, graph: &Graph) -> Path {
        dijkstra_search(begin, end, graph)
    }

    fn name(&self) -> &'static str {
        "dijkstra"
    }
}

/// Per-node bookkeeping shared by Dijkstra and A*.
#[derive(Debug, Clone)]
pub(crate) struct Label {
    /// Best known cost from the start, node weights included
    pub(crate) cost: Weight,
    pub(crate) parent: Option<NodeId>,
    pub(crate) parent_edge: Option<EdgeId>,
}

impl Label {
    fn unreached() -> Self {
        Self {
            cost: INFINITE_COST,
            parent: None,
            parent_edge: None,
        }
    }
}

/// Fresh labels for every node: zero cost at `begin`, infinite elsewhere.
pub(crate) fn initial_labels(graph: &Graph, begin: NodeId) -> HashMap<NodeId, Label> {
    graph
        .nodes()
        .map(|node| {
            let mut label = Label::unreached();
            if node.id() == begin {
                label.cost = 0;
            }
            (node.id(), label)
        })
        .collect()
}

/// Follow parent links from `end` back to `begin`.
///
/// A chain that stops anywhere other than `begin` yields an empty path.
pub(crate) fn reconstruct(
    graph: &Graph,
    labels: &HashMap<NodeId, Label>,
    begin: NodeId,
    end: NodeId,
) -> Path {
    let mut steps = Vec::new();
    let mut current = end;
    while let Some(label) = labels.get(&current) {
        let (Some(parent), Some(edge)) = (label.parent, label.parent_edge) else {
            break;
        };
        steps.push((parent, current, edge));
        current = parent;
        if steps.len() > labels.len() {
            // parent links form a cycle
            return Path::new();
        }
    }

    if steps.is_empty() || current != begin {
        return Path::new();
    }
    steps.reverse();
    build_path(graph, &steps)
}

/// Find the minimal-weight route from `begin` to `end`.
///
/// The cost of reaching a node is the sum of edge and node weights along
/// the way. Once some route to `end` is known, branches that cannot beat it
/// are no longer queued.
pub fn dijkstra_search(begin: NodeId, end: NodeId, graph: &Graph) -> Path {
    let Some((start, finish)) = endpoints(graph, begin, end) else {
        return Path::new();
    };

    let mut labels = initial_labels(graph, start.id());
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut queue = CostQueue::new();
    queue.push(start.id(), 0);

    let mut best_to_target = INFINITE_COST;
    let mut iterations = 0;

    while let Some((current, _)) = queue.pop_min() {
        iterations += 1;
        visited.insert(current);

        let (Some(node), Some(current_cost)) =
            (graph.node(current), labels.get(&current).map(|l| l.cost))
        else {
            continue;
        };

        for info in node.edges() {
            let Some(edge) = graph.edge(info.id) else {
                continue;
            };
            if visited.contains(&info.tail) {
                continue;
            }
            let (Some(tail), Some(label)) = (graph.node(info.tail), labels.get_mut(&info.tail))
            else {
                continue;
            };

            let candidate = current_cost
                .saturating_add(edge.weight())
                .saturating_add(tail.weight());
            if info.tail == finish.id() {
                best_to_target = best_to_target.min(candidate);
            }

            if candidate < label.cost {
                label.cost = candidate;
                label.parent = Some(current);
                label.parent_edge = Some(info.id);
                queue.remove(info.tail);
                if candidate < best_to_target {
                    queue.push(info.tail, candidate);
                }
            } else if label.cost < best_to_target && !queue.contains(info.tail) {
                queue.push(info.tail, label.cost);
            }
        }
        trace!(
            "Dijkstra settled node {current} at cost {current_cost}, queue={}, best={best_to_target}",
            queue.len()
        );
    }

    let path = reconstruct(graph, &labels, start.id(), finish.id()).with_iterations(iterations);
    debug!(
        "Dijkstra {begin} -> {end}: found={}, weight={}, iterations={iterations}",
        path.is_found(),
        path.total_weight()
    );
    path
}

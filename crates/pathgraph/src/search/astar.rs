//! A* search with a pluggable heuristic.

use super::dijkstra::{initial_labels, reconstruct};
use super::queue::CostQueue;
use super::{endpoints, PathSearch};
use crate::graph::{Graph, NodeId, Weight, Weighted};
use crate::path::Path;
use log::{debug, trace};
use std::collections::{HashMap, HashSet};

/// Estimate of the remaining cost between two nodes.
///
/// A* only returns a minimal-weight path when the estimate never exceeds
/// the true remaining cost.
pub trait Heuristic {
    /// Estimated cost from `from` to `to`.
    fn estimate(&self, graph: &Graph, from: NodeId, to: NodeId) -> Weight;
}

impl<F> Heuristic for F
where
    F: Fn(&Graph, NodeId, NodeId) -> Weight,
{
    fn estimate(&self, graph: &Graph, from: NodeId, to: NodeId) -> Weight {
        self(graph, from, to)
    }
}

/// Heuristic that always answers 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    fn estimate(&self, _graph: &Graph, _from: NodeId, _to: NodeId) -> Weight {
        0
    }
}

/// When A* stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Termination {
    /// Stop the moment the target is reached through any edge.
    #[default]
    FirstRelaxation,
    /// Stop when the target leaves the queue, which keeps the result
    /// minimal for consistent heuristics.
    FirstSettle,
}

/// A* strategy bundling a heuristic and a stop rule.
#[derive(Debug, Clone, Default)]
pub struct AStar<H = ZeroHeuristic> {
    heuristic: H,
    termination: Termination,
}

impl<H: Heuristic> AStar<H> {
    /// Create an A* strategy that stops on first relaxation of the target.
    pub fn new(heuristic: H) -> Self {
        Self {
            heuristic,
            termination: Termination::default(),
        }
    }

    /// Change the stop rule.
    pub fn with_termination(mut self, termination: Termination) -> Self {
        self.termination = termination;
        self
    }

    /// The configured heuristic.
    pub fn heuristic(&self) -> &H {
        &self.heuristic
    }
}

impl<H: Heuristic> PathSearch for AStar<H> {
    fn search(&self, begin: NodeId, end: NodeId, graph: &Graph) -> Path {
        astar_search_with(begin, end, graph, &self.heuristic, self.termination)
    }

    fn name(&self) -> &'static str {
        "astar"
    }
}

/// Heuristic-guided search that stops as soon as the target is reached.
///
/// Equivalent to [`astar_search_with`] using [`Termination::FirstRelaxation`].
pub fn astar_search(begin: NodeId, end: NodeId, graph: &Graph, heuristic: &dyn Heuristic) -> Path {
    astar_search_with(begin, end, graph, heuristic, Termination::FirstRelaxation)
}

/// Heuristic-guided search with an explicit stop rule.
///
/// Nodes are queued by path cost plus the heuristic estimate, which is
/// computed once per node on its first relaxation. The key uses only that
/// node's own estimate; estimates of earlier nodes never add up into the
/// path cost.
pub fn astar_search_with(
    begin: NodeId,
    end: NodeId,
    graph: &Graph,
    heuristic: &dyn Heuristic,
    termination: Termination,
) -> Path {
    let Some((start, finish)) = endpoints(graph, begin, end) else {
        return Path::new();
    };

    let mut labels = initial_labels(graph, start.id());
    let mut estimates: HashMap<NodeId, Weight> = HashMap::new();
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut queue = CostQueue::new();
    queue.push(start.id(), 0);
    let mut iterations = 0;

    while let Some((current, _)) = queue.pop_min() {
        iterations += 1;
        visited.insert(current);
        if termination == Termination::FirstSettle && current == finish.id() {
            break;
        }

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

            let estimate = *estimates
                .entry(info.tail)
                .or_insert_with(|| heuristic.estimate(graph, info.tail, finish.id()));
            let candidate = current_cost
                .saturating_add(edge.weight())
                .saturating_add(tail.weight());

            if candidate < label.cost {
                label.cost = candidate;
                label.parent = Some(current);
                label.parent_edge = Some(info.id);
                queue.push(info.tail, candidate.saturating_add(estimate));
            } else if !queue.contains(info.tail) {
                queue.push(info.tail, label.cost.saturating_add(estimate));
            }

            if termination == Termination::FirstRelaxation && info.tail == finish.id() {
                queue.clear();
                break;
            }
        }
        trace!("A* expanded node {current}, queue={}", queue.len());
    }

    let path = reconstruct(graph, &labels, start.id(), finish.id()).with_iterations(iterations);
    debug!(
        "A* {begin} -> {end}: found={}, weight={}, iterations={iterations}",
        path.is_found(),
        path.total_weight()
    );
    path
}

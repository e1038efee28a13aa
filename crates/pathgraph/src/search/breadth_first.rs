//! Breadth-first search with a flat exploration log.

use super::{build_path, endpoints, PathSearch};
use crate::graph::{EdgeId, Graph, NodeId};
use crate::path::Path;
use log::{debug, trace};
use std::collections::{HashSet, VecDeque};

/// Breadth-first strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct BreadthFirst;

impl PathSearch for BreadthFirst {
    fn search(&self, begin: NodeId, end: NodeId, graph: &Graph) -> Path {
        breadth_first_search(begin, end, graph)
    }

    fn name(&self) -> &'static str {
        "bfs"
    }
}

/// Find a route from `begin` to `end` with the fewest edges.
///
/// Weights are ignored while exploring; the returned path is still weighed.
/// Every transition is logged in exploration order and the route is
/// recovered afterwards by walking that log backwards.
pub fn breadth_first_search(begin: NodeId, end: NodeId, graph: &Graph) -> Path {
    let Some((start, finish)) = endpoints(graph, begin, end) else {
        return Path::new();
    };

    let mut visited: HashSet<NodeId> = HashSet::from([start.id()]);
    let mut queue: VecDeque<NodeId> = VecDeque::from([start.id()]);
    let mut log: Vec<(NodeId, NodeId, EdgeId)> = Vec::new();
    let mut finish_found = false;
    let mut iterations = 0;

    while !finish_found {
        let Some(current) = queue.pop_front() else {
            break;
        };
        iterations += 1;

        let Some(node) = graph.node(current) else {
            continue;
        };
        for info in node.edges() {
            if !graph.contains_edge(info.id) || visited.contains(&info.tail) {
                continue;
            }
            if !graph.contains_node(info.head) || !graph.contains_node(info.tail) {
                continue;
            }

            log.push((current, info.tail, info.id));
            if info.tail == finish.id() {
                finish_found = true;
                break;
            }
            visited.insert(info.tail);
            queue.push_back(info.tail);
        }
        trace!("BFS expanded node {current}, queue={}", queue.len());
    }

    if !finish_found {
        debug!("BFS {begin} -> {end}: no path, iterations={iterations}");
        return Path::new();
    }

    let steps = trace_back(&log, start.id());
    let path = build_path(graph, &steps).with_iterations(iterations);
    debug!(
        "BFS {begin} -> {end}: found {} steps, weight={}, iterations={iterations}",
        path.len(),
        path.total_weight()
    );
    path
}

/// Recover the route ending at the last log entry.
///
/// Walks the log backwards, keeping each entry whose tail is the node
/// currently being chased, until the chase reaches `begin`.
fn trace_back(log: &[(NodeId, NodeId, EdgeId)], begin: NodeId) -> Vec<(NodeId, NodeId, EdgeId)> {
    let Some((&last, earlier)) = log.split_last() else {
        return Vec::new();
    };

    let mut route = vec![last];
    let mut chased = last.0;
    for &entry in earlier.iter().rev() {
        if chased == begin {
            break;
        }
        if entry.1 == chased {
            route.push(entry);
            chased = entry.0;
        }
    }

    if chased != begin {
        return Vec::new();
    }
    route.reverse();
    route
}

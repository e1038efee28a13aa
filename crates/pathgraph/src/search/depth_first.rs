//! Depth-first search with an explicit frame stack.

use super::{build_path, endpoints, PathSearch};
use crate::graph::{EdgeId, Graph, NodeId};
use crate::path::Path;
use log::{debug, trace};
use std::collections::HashSet;

/// Depth-first strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthFirst;

impl PathSearch for DepthFirst {
    fn search(&self, begin: NodeId, end: NodeId, graph: &Graph) -> Path {
        depth_first_search(begin, end, graph)
    }

    fn name(&self) -> &'static str {
        "dfs"
    }
}

// A node being expanded and how far through its adjacency we are.
struct Frame {
    node: NodeId,
    cursor: usize,
}

/// Find the first route from `begin` to `end` in depth-first order.
///
/// Branches are tried in adjacency insertion order. The result is not
/// necessarily the cheapest or the shortest route.
pub fn depth_first_search(begin: NodeId, end: NodeId, graph: &Graph) -> Path {
    let Some((start, finish)) = endpoints(graph, begin, end) else {
        return Path::new();
    };

    let mut visited: HashSet<NodeId> = HashSet::from([start.id()]);
    let mut steps: Vec<(NodeId, NodeId, EdgeId)> = Vec::new();
    let mut stack = vec![Frame {
        node: start.id(),
        cursor: 0,
    }];
    let mut iterations = 0;

    while let Some(frame) = stack.last_mut() {
        iterations += 1;

        let mut next = None;
        if let Some(node) = graph.node(frame.node) {
            while let Some(&info) = node.edge_at(frame.cursor) {
                frame.cursor += 1;

                if !graph.contains_edge(info.id) || visited.contains(&info.tail) {
                    continue;
                }
                if !graph.contains_node(info.head) || !graph.contains_node(info.tail) {
                    continue;
                }
                next = Some((info.head, info.tail, info.id));
                break;
            }
        }

        match next {
            Some(step @ (_, tail, _)) => {
                steps.push(step);
                if tail == finish.id() {
                    let path = build_path(graph, &steps).with_iterations(iterations);
                    debug!(
                        "DFS {begin} -> {end}: found {} steps, weight={}, iterations={iterations}",
                        path.len(),
                        path.total_weight()
                    );
                    return path;
                }
                trace!("DFS descending into node {tail}");
                visited.insert(tail);
                stack.push(Frame {
                    node: tail,
                    cursor: 0,
                });
            }
            None => {
                stack.pop();
                steps.pop();
            }
        }
    }

    debug!("DFS {begin} -> {end}: no path, iterations={iterations}");
    Path::new()
}

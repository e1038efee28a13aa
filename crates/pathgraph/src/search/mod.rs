//! Path search strategies.
//!
//! Four strategies share one shape, `(begin, end, &Graph) -> Path`:
//! - [`depth_first_search`]: first route found, no cost guarantee
//! - [`breadth_first_search`]: fewest edges, no weight guarantee
//! - [`dijkstra_search`]: minimal total weight
//! - [`astar_search`]: heuristic-guided, stops as soon as the target is reached
//!
//! Every failure (unknown ids, `begin == end`, unreachable target) yields an
//! empty [`Path`].

mod astar;
mod breadth_first;
mod depth_first;
mod dijkstra;
mod queue;

pub use astar::{astar_search, astar_search_with, AStar, Heuristic, Termination, ZeroHeuristic};
pub use breadth_first::{breadth_first_search, BreadthFirst};
pub use depth_first::{depth_first_search, DepthFirst};
pub use dijkstra::{dijkstra_search, Dijkstra};

use crate::error::GraphError;
use crate::graph::{EdgeId, Graph, Node, NodeId};
use crate::path::Path;
use std::fmt;
use std::str::FromStr;

/// A path search strategy.
pub trait PathSearch {
    /// Find a path from `begin` to `end`. An empty path means none was found.
    fn search(&self, begin: NodeId, end: NodeId, graph: &Graph) -> Path;

    /// Short human-readable name.
    fn name(&self) -> &'static str;
}

/// Strategy selector for runtime dispatch, e.g. from a key binding or CLI flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchStrategy {
    /// Depth-first search
    DepthFirst,
    /// Breadth-first search
    BreadthFirst,
    /// Dijkstra's algorithm
    Dijkstra,
    /// A* (with [`ZeroHeuristic`] unless run through [`SearchStrategy::search_with`])
    AStar,
}

impl SearchStrategy {
    /// All strategies, in a fixed order.
    pub const ALL: [SearchStrategy; 4] = [
        SearchStrategy::DepthFirst,
        SearchStrategy::BreadthFirst,
        SearchStrategy::Dijkstra,
        SearchStrategy::AStar,
    ];

    /// Run the strategy, giving A* the supplied heuristic.
    ///
    /// The heuristic is ignored by the other strategies.
    pub fn search_with(
        &self,
        begin: NodeId,
        end: NodeId,
        graph: &Graph,
        heuristic: &dyn Heuristic,
    ) -> Path {
        match self {
            SearchStrategy::DepthFirst => depth_first_search(begin, end, graph),
            SearchStrategy::BreadthFirst => breadth_first_search(begin, end, graph),
            SearchStrategy::Dijkstra => dijkstra_search(begin, end, graph),
            SearchStrategy::AStar => astar_search(begin, end, graph, heuristic),
        }
    }

    /// Whether the strategy guarantees a minimal-weight result.
    pub fn is_cost_optimal(&self) -> bool {
        matches!(self, SearchStrategy::Dijkstra)
    }
}

impl PathSearch for SearchStrategy {
    fn search(&self, begin: NodeId, end: NodeId, graph: &Graph) -> Path {
        self.search_with(begin, end, graph, &ZeroHeuristic)
    }

    fn name(&self) -> &'static str {
        match self {
            SearchStrategy::DepthFirst => "dfs",
            SearchStrategy::BreadthFirst => "bfs",
            SearchStrategy::Dijkstra => "dijkstra",
            SearchStrategy::AStar => "astar",
        }
    }
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for SearchStrategy {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dfs" | "depth-first" | "depth_first" => Ok(SearchStrategy::DepthFirst),
            "bfs" | "breadth-first" | "breadth_first" => Ok(SearchStrategy::BreadthFirst),
            "dijkstra" => Ok(SearchStrategy::Dijkstra),
            "astar" | "a*" | "a-star" => Ok(SearchStrategy::AStar),
            _ => Err(GraphError::InvalidOperation {
                message: format!("Unknown search strategy: {s}"),
            }),
        }
    }
}

/// Resolve the endpoints of a search, rejecting unknown ids and `begin == end`.
pub(crate) fn endpoints(graph: &Graph, begin: NodeId, end: NodeId) -> Option<(&Node, &Node)> {
    let start = graph.node(begin)?;
    let finish = graph.node(end)?;
    if start.id() == finish.id() {
        return None;
    }
    Some((start, finish))
}

/// Turn `(head, tail, edge)` id triples into a weighed [`Path`].
///
/// Any step referring to a missing node or edge voids the whole path.
pub(crate) fn build_path(graph: &Graph, steps: &[(NodeId, NodeId, EdgeId)]) -> Path {
    let mut path = Path::new();
    for &(head, tail, edge) in steps {
        match (graph.node(head), graph.node(tail), graph.edge(edge)) {
            (Some(head), Some(tail), Some(edge)) => path.append(head, tail, edge),
            _ => return Path::new(),
        }
    }
    path
}

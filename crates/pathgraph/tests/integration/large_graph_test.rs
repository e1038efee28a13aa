//! Integration tests for large graphs (100K nodes, 500K edges).

use pathgraph::{dijkstra_search, EdgeDirection, Graph, NodeId, PathSearch, SearchStrategy};

/// Ring of `num_nodes` where node i links to the next `fan_out` nodes.
fn ring(num_nodes: usize, fan_out: usize) -> (Graph, Vec<NodeId>) {
    let mut graph = Graph::new();
    let node_ids: Vec<_> = (0..num_nodes).map(|i| graph.add_node((i % 3) as u64)).collect();

    for i in 0..num_nodes {
        for j in 1..=fan_out {
            let target = node_ids[(i + j) % num_nodes];
            graph
                .connect_nodes(node_ids[i], target, EdgeDirection::Straight, j as u64 * 2)
                .unwrap();
        }
    }
    (graph, node_ids)
}

#[test]
#[ignore] // This test is slow, run with --ignored flag
fn test_large_graph_100k_nodes_500k_edges() {
    let num_nodes = 100_000;
    let (graph, node_ids) = ring(num_nodes, 5);

    assert_eq!(graph.node_count(), num_nodes);
    assert_eq!(graph.edge_count(), num_nodes * 5);

    let begin = node_ids[0];
    let end = node_ids[num_nodes / 2];
    let path = dijkstra_search(begin, end, &graph);
    assert!(path.is_contiguous());
    assert_eq!(path.end(), Some(end));

    let bfs = SearchStrategy::BreadthFirst.search(begin, end, &graph);
    assert_eq!(bfs.len(), num_nodes / 2 / 5);
}

#[test]
fn test_medium_grid_10k_nodes() {
    let side = 100;
    let mut graph = Graph::new();
    for _ in 0..side * side {
        graph.add_node(1);
    }
    let id = |row: usize, col: usize| (row * side + col + 1) as NodeId;
    for row in 0..side {
        for col in 0..side {
            if col + 1 < side {
                graph
                    .connect_nodes(id(row, col), id(row, col + 1), EdgeDirection::Mutual, 1)
                    .unwrap();
            }
            if row + 1 < side {
                graph
                    .connect_nodes(id(row, col), id(row + 1, col), EdgeDirection::Mutual, 1)
                    .unwrap();
            }
        }
    }

    assert_eq!(graph.node_count(), side * side);
    assert_eq!(graph.edge_count(), 2 * side * (side - 1));

    let corner = id(side - 1, side - 1);
    let hops = 2 * (side - 1);
    for strategy in [
        SearchStrategy::BreadthFirst,
        SearchStrategy::Dijkstra,
        SearchStrategy::AStar,
    ] {
        let path = strategy.search(1, corner, &graph);
        assert_eq!(path.len(), hops, "{strategy}");
        assert_eq!(path.total_weight(), (2 * hops + 1) as u64, "{strategy}");
    }

    let dfs = SearchStrategy::DepthFirst.search(1, corner, &graph);
    assert!(dfs.is_contiguous());
    assert!(dfs.len() >= hops);
}

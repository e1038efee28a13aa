//! Unit tests for JSON snapshots and DOT output.

use pathgraph::export::{
    export_dot_styled, export_json, import_json, load_json, save_json, snapshot, DotOptions,
};
use pathgraph::{
    dijkstra_search, DataHandle, EdgeDirection, Graph, GraphError, Weighted, INVALID_ID,
};
use tempfile::TempDir;

fn sample_graph() -> Graph {
    let mut graph = Graph::new();
    let a = graph.add_node_with_data(1, Some(DataHandle(100)));
    let b = graph.add_node(2);
    let c = graph.add_node(3);
    let d = graph.add_node(4);
    graph.connect_nodes(a, b, EdgeDirection::Straight, 5).unwrap();
    graph.connect_nodes(b, c, EdgeDirection::Mutual, 6).unwrap();
    graph.connect_nodes(a, d, EdgeDirection::Reverse, 7).unwrap();
    let cd = graph.connect_nodes(c, d, EdgeDirection::Straight, 8).unwrap();
    graph.edge_mut(cd).unwrap().add_weight(3);
    graph.node_mut(b).unwrap().disable();
    graph
}

#[test]
fn test_json_round_trip_preserves_state() {
    let graph = sample_graph();
    let json = export_json(&graph).unwrap();
    let restored = import_json(&json).unwrap();

    assert_eq!(snapshot(&restored), snapshot(&graph));
    assert_eq!(restored.node(1).unwrap().data(), Some(DataHandle(100)));
    assert!(!restored.node(2).unwrap().is_enabled());
    assert_eq!(restored.edge(4).unwrap().dynamic_weight(), 3);
    // reverse edges are stored normalized
    assert_eq!(restored.edge(3).unwrap().head(), 4);
}

#[test]
fn test_restored_graph_searches_the_same() {
    let graph = sample_graph();
    let restored = import_json(&export_json(&graph).unwrap()).unwrap();

    for end in 2..=4 {
        assert_eq!(
            dijkstra_search(1, end, &restored),
            dijkstra_search(1, end, &graph)
        );
    }
}

#[test]
fn test_restored_graph_recycles_the_same_ids() {
    let mut graph = sample_graph();
    graph.remove_edge(2);
    graph.remove_node(3);

    let mut restored = import_json(&export_json(&graph).unwrap()).unwrap();

    assert_eq!(restored.add_node(1), graph.add_node(1));
    let e_restored = restored.connect_nodes(1, 2, EdgeDirection::Mutual, 1).unwrap();
    let e_source = graph.connect_nodes(1, 2, EdgeDirection::Mutual, 1).unwrap();
    assert_eq!(e_restored, e_source);
}

#[test]
fn test_save_and_load_file() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("graph.json");

    let graph = sample_graph();
    save_json(&graph, &file).unwrap();
    let loaded = load_json(&file).unwrap();

    assert_eq!(loaded.node_count(), 4);
    assert_eq!(loaded.edge_count(), 4);
    assert_eq!(snapshot(&loaded), snapshot(&graph));
}

#[test]
fn test_load_missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let result = load_json(temp_dir.path().join("missing.json"));
    assert!(matches!(result, Err(GraphError::Io { .. })));
}

#[test]
fn test_import_rejects_dangling_edge() {
    let json = r#"{
        "nodes": [{"id": 1, "weights": {"enabled": true, "base": 1, "dynamic": 0}}],
        "edges": [{"id": 1, "head": 1, "tail": 9, "direction": "Straight",
                   "weights": {"enabled": true, "base": 1, "dynamic": 0}}]
    }"#;
    assert!(matches!(
        import_json(json),
        Err(GraphError::NodeNotFound { node_id: 9 })
    ));
}

#[test]
fn test_import_repairs_id_pool_holding_reserved_id() {
    let json = r#"{
        "nodes": [], "edges": [],
        "node_ids": {"next": 0, "free": [0]},
        "edge_ids": {"next": 0, "free": [0, 0]}
    }"#;
    let mut graph = import_json(json).unwrap();

    let a = graph.add_node(1);
    let b = graph.add_node(1);
    assert_ne!(a, INVALID_ID);
    assert_eq!((a, b), (1, 2));

    let e = graph.connect_nodes(a, b, EdgeDirection::Straight, 1).unwrap();
    assert_ne!(e, INVALID_ID);
}

#[test]
fn test_import_rejects_exhausted_id_pool() {
    let json = r#"{
        "nodes": [], "edges": [],
        "node_ids": {"next": 18446744073709551615, "free": []}
    }"#;
    assert!(matches!(
        import_json(json),
        Err(GraphError::Serialization { .. })
    ));
}

#[test]
fn test_dot_highlights_path() {
    let graph = sample_graph();
    let path = dijkstra_search(1, 3, &graph);
    assert_eq!(path.node_ids(), vec![1, 2, 3]);

    let options = DotOptions::default().with_highlight(path);
    let dot = export_dot_styled(&graph, &options).unwrap();

    assert!(dot.starts_with("digraph path_graph {"));
    assert!(dot.contains("n1 [label=\"1\\nw=1\", fillcolor=\"#E53935\"];"));
    assert!(dot.contains("n4 [label=\"4\\nw=4\", fillcolor=\"#E0E0E0\"];"));
    assert!(dot.contains("n1 -> n2 [label=\"5\", color=\"#E53935\", penwidth=2];"));
    assert!(dot.contains("n3 -> n4 [label=\"11\"];"));
    assert!(dot.contains("n2 [label=\"2\\nw=2\", fillcolor=\"#E53935\", style=\"filled,dashed\"];"));
}

//! Unit tests for the graph container: ids, connection rules, removal.

use pathgraph::{DataHandle, EdgeDirection, Graph, GraphError, Weighted, INVALID_ID};

fn three_nodes() -> (Graph, [u64; 3]) {
    let mut graph = Graph::new();
    let a = graph.add_node(1);
    let b = graph.add_node(1);
    let c = graph.add_node(1);
    (graph, [a, b, c])
}

#[test]
fn test_node_and_edge_ids_are_independent() {
    let (mut graph, [a, b, c]) = three_nodes();
    assert_eq!([a, b, c], [1, 2, 3]);

    let e = graph.connect_nodes(a, b, EdgeDirection::Straight, 1).unwrap();
    assert_eq!(e, 1);
    let e = graph.connect_nodes(b, c, EdgeDirection::Straight, 1).unwrap();
    assert_eq!(e, 2);
}

#[test]
fn test_insert_node_with_explicit_id() {
    let mut graph = Graph::new();
    let id = graph.insert_node(5, 2, Some(DataHandle(77))).unwrap();
    assert_eq!(id, 5);
    assert_eq!(graph.node(5).unwrap().data(), Some(DataHandle(77)));

    let err = graph.insert_node(5, 1, None).unwrap_err();
    assert!(matches!(err, GraphError::DuplicateNode { node_id: 5 }));
    assert_eq!(graph.node_count(), 1);
}

#[test]
fn test_insert_node_zero_allocates() {
    let mut graph = Graph::new();
    let id = graph.insert_node(INVALID_ID, 1, None).unwrap();
    assert_eq!(id, 1);
}

#[test]
fn test_allocation_skips_explicit_ids() {
    let mut graph = Graph::new();
    graph.insert_node(1, 1, None).unwrap();
    graph.insert_node(2, 1, None).unwrap();
    graph.insert_node(4, 1, None).unwrap();

    assert_eq!(graph.add_node(1), 3);
    assert_eq!(graph.add_node(1), 5);
}

#[test]
fn test_removed_node_id_is_reused() {
    let mut graph = Graph::new();
    let a = graph.add_node(1);
    let b = graph.add_node(1);
    let _c = graph.add_node(1);

    assert!(graph.remove_node(b).is_some());
    assert_eq!(graph.add_node(1), b);
    assert_eq!(graph.add_node(1), 4);

    assert!(graph.remove_node(a).is_some());
    assert!(graph.remove_node(a).is_none());
    assert_eq!(graph.add_node(1), a);
}

#[test]
fn test_removed_edge_ids_reused_lifo() {
    let (mut graph, [a, b, c]) = three_nodes();
    let e1 = graph.connect_nodes(a, b, EdgeDirection::Straight, 1).unwrap();
    let e2 = graph.connect_nodes(b, c, EdgeDirection::Straight, 1).unwrap();
    let _e3 = graph.connect_nodes(a, c, EdgeDirection::Straight, 1).unwrap();

    graph.remove_edge(e1);
    graph.remove_edge(e2);

    assert_eq!(graph.connect_nodes(c, a, EdgeDirection::Straight, 1).unwrap(), e2);
    assert_eq!(graph.connect_nodes(c, b, EdgeDirection::Straight, 1).unwrap(), e1);
    assert_eq!(graph.connect_nodes(b, a, EdgeDirection::Straight, 1).unwrap(), 4);
}

#[test]
fn test_straight_registers_on_head_only() {
    let (mut graph, [a, b, _]) = three_nodes();
    let e = graph.connect_nodes(a, b, EdgeDirection::Straight, 1).unwrap();

    assert!(graph.node(a).unwrap().has_edge(e));
    assert!(!graph.node(b).unwrap().has_edge(e));

    let info = graph.node(a).unwrap().edge_info(e).copied().unwrap();
    assert_eq!((info.head, info.tail), (a, b));
}

#[test]
fn test_mutual_registers_on_both() {
    let (mut graph, [a, b, _]) = three_nodes();
    let e = graph.connect_nodes(a, b, EdgeDirection::Mutual, 1).unwrap();

    let from_a = graph.node(a).unwrap().edge_info(e).copied().unwrap();
    let from_b = graph.node(b).unwrap().edge_info(e).copied().unwrap();
    assert_eq!((from_a.head, from_a.tail), (a, b));
    assert_eq!((from_b.head, from_b.tail), (b, a));
    assert_eq!(graph.edge(e).unwrap().direction(), EdgeDirection::Mutual);
}

#[test]
fn test_reverse_is_normalized() {
    let (mut graph, [a, b, _]) = three_nodes();
    let e = graph.connect_nodes(a, b, EdgeDirection::Reverse, 1).unwrap();

    let edge = graph.edge(e).unwrap();
    assert_eq!(edge.direction(), EdgeDirection::Straight);
    assert_eq!((edge.head(), edge.tail()), (b, a));
    assert!(graph.node(b).unwrap().has_edge(e));
    assert!(!graph.node(a).unwrap().has_edge(e));
}

#[test]
fn test_self_loop_rejected() {
    let (mut graph, [a, _, _]) = three_nodes();
    let err = graph
        .connect_nodes(a, a, EdgeDirection::Straight, 1)
        .unwrap_err();

    assert!(matches!(err, GraphError::SelfLoop { node_id } if node_id == a));
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.node(a).unwrap().degree(), 0);
}

#[test]
fn test_missing_endpoint_rejected() {
    let (mut graph, [a, _, _]) = three_nodes();

    assert!(matches!(
        graph.connect_nodes(a, 42, EdgeDirection::Straight, 1),
        Err(GraphError::NodeNotFound { node_id: 42 })
    ));
    assert!(matches!(
        graph.connect_nodes(42, a, EdgeDirection::Straight, 1),
        Err(GraphError::NodeNotFound { node_id: 42 })
    ));
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_invalid_direction_code_rejected() {
    let (mut graph, [a, b, _]) = three_nodes();

    assert!(matches!(
        graph.connect_nodes_raw(a, b, 0, 1),
        Err(GraphError::InvalidDirection { .. })
    ));
    assert!(matches!(
        graph.connect_nodes_raw(a, b, 9, 1),
        Err(GraphError::InvalidDirection { .. })
    ));

    let e = graph.connect_nodes_raw(a, b, 3, 5).unwrap();
    assert!(graph.edge(e).unwrap().is_mutual());
    assert_eq!(graph.edge(e).unwrap().weight(), 5);
}

#[test]
fn test_remove_edge_detaches_and_keeps_nodes() {
    let (mut graph, [a, b, _]) = three_nodes();
    let e = graph.connect_nodes(a, b, EdgeDirection::Mutual, 1).unwrap();

    let removed = graph.remove_edge(e).unwrap();
    assert_eq!(removed.id(), e);
    assert!(graph.edge(e).is_none());
    assert!(!graph.node(a).unwrap().has_edge(e));
    assert!(!graph.node(b).unwrap().has_edge(e));
    assert_eq!(graph.node_count(), 3);
}

#[test]
fn test_remove_unknown_edge_is_noop() {
    let (mut graph, [a, b, _]) = three_nodes();
    graph.connect_nodes(a, b, EdgeDirection::Straight, 1).unwrap();

    assert!(graph.remove_edge(99).is_none());
    assert_eq!(graph.edge_count(), 1);
    // the unknown id must not enter the free pool
    assert_eq!(graph.connect_nodes(b, a, EdgeDirection::Straight, 1).unwrap(), 2);
}

#[test]
fn test_remove_node_drops_incoming_and_outgoing_edges() {
    let (mut graph, [a, b, c]) = three_nodes();
    let ab = graph.connect_nodes(a, b, EdgeDirection::Straight, 1).unwrap();
    let bc = graph.connect_nodes(b, c, EdgeDirection::Straight, 1).unwrap();
    let ca = graph.connect_nodes(c, a, EdgeDirection::Mutual, 1).unwrap();

    graph.remove_node(b).unwrap();

    assert!(!graph.contains_edge(ab));
    assert!(!graph.contains_edge(bc));
    assert!(graph.contains_edge(ca));
    assert!(!graph.node(a).unwrap().has_edge(ab));
    assert!(graph.node(a).unwrap().has_edge(ca));
}

#[test]
fn test_reconnect_edge() {
    let (mut graph, [a, b, c]) = three_nodes();
    let e = graph.connect_nodes(a, b, EdgeDirection::Straight, 3).unwrap();

    graph
        .reconnect_edge(e, b, c, Some(EdgeDirection::Mutual))
        .unwrap();

    assert!(!graph.node(a).unwrap().has_edge(e));
    assert!(graph.node(b).unwrap().has_edge(e));
    assert!(graph.node(c).unwrap().has_edge(e));
    assert_eq!(graph.edge(e).unwrap().weight(), 3);

    assert!(matches!(
        graph.reconnect_edge(e, c, c, None),
        Err(GraphError::SelfLoop { .. })
    ));
    assert!(matches!(
        graph.reconnect_edge(50, a, b, None),
        Err(GraphError::EdgeNotFound { edge_id: 50 })
    ));
    // a failed reconnect leaves the edge where it was
    assert!(graph.node(c).unwrap().has_edge(e));
}

#[test]
fn test_weight_updates_through_graph() {
    let (mut graph, [a, b, _]) = three_nodes();
    let e = graph.connect_nodes(a, b, EdgeDirection::Straight, 2).unwrap();

    graph.edge_mut(e).unwrap().add_weight(5);
    graph.node_mut(a).unwrap().set_base_weight(9);

    assert_eq!(graph.edge(e).unwrap().weight(), 7);
    assert_eq!(graph.node(a).unwrap().weight(), 9);
}

#[test]
fn test_clear_resets_ids() {
    let (mut graph, [a, b, _]) = three_nodes();
    graph.connect_nodes(a, b, EdgeDirection::Straight, 1).unwrap();
    graph.remove_node(b);

    graph.clear();
    assert!(graph.is_empty());
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.add_node(1), 1);
    assert_eq!(graph.add_node(1), 2);
    assert_eq!(graph.connect_nodes(1, 2, EdgeDirection::Straight, 1).unwrap(), 1);
}

#[test]
fn test_lookup_missing() {
    let graph = Graph::new();
    assert!(graph.node(1).is_none());
    assert!(graph.edge(1).is_none());
    assert!(graph.node(INVALID_ID).is_none());
}

#[test]
fn test_hub_adjacency_keeps_order_through_bulk_edits() {
    let mut graph = Graph::new();
    let hub = graph.add_node(0);
    let spokes: Vec<_> = (0..5_000).map(|_| graph.add_node(0)).collect();
    let edges: Vec<_> = spokes
        .iter()
        .map(|&s| graph.connect_nodes(hub, s, EdgeDirection::Straight, 1).unwrap())
        .collect();

    // drop every other spoke edge
    for &e in edges.iter().step_by(2) {
        assert!(graph.remove_edge(e).is_some());
    }

    let remaining: Vec<_> = graph.node(hub).unwrap().edges().map(|i| i.id).collect();
    let expected: Vec<_> = edges.iter().skip(1).step_by(2).copied().collect();
    assert_eq!(remaining, expected);
    assert_eq!(graph.node(hub).unwrap().edge_at(0).map(|i| i.id), Some(edges[1]));

    // freed ids come back most recent first
    let next = graph.connect_nodes(spokes[0], hub, EdgeDirection::Straight, 1).unwrap();
    assert_eq!(next, edges[edges.len() - 2]);
}

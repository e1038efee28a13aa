//! Unit tests for node and edge weights.

use pathgraph::{Edge, EdgeDirection, Node, Weighted};

#[test]
fn test_weight_is_base_plus_dynamic() {
    let mut node = Node::new(1, 3, None);
    node.add_weight(4);

    assert_eq!(node.base_weight(), 3);
    assert_eq!(node.dynamic_weight(), 4);
    assert_eq!(node.weight(), 7);
}

#[test]
fn test_negative_add_subtracts() {
    let mut edge = Edge::new(1, 1, 2, EdgeDirection::Straight, 1);
    edge.add_weight(10);
    edge.add_weight(-4);

    assert_eq!(edge.dynamic_weight(), 6);
    assert_eq!(edge.weight(), 7);
}

#[test]
fn test_subtract_clamps_at_zero() {
    let mut node = Node::new(1, 5, None);
    node.add_weight(3);
    node.subtract_weight(10);
    assert_eq!(node.dynamic_weight(), 0);

    // the sign of the argument is ignored
    node.add_weight(3);
    node.subtract_weight(-2);
    assert_eq!(node.dynamic_weight(), 1);

    node.add_weight(-100);
    assert_eq!(node.dynamic_weight(), 0);
    assert_eq!(node.weight(), 5);
}

#[test]
fn test_dynamic_weight_never_negative_over_sequences() {
    let deltas: [i64; 12] = [5, -3, -9, 2, 0, -1, 7, -7, 4, -20, 1, i64::MIN];
    let mut node = Node::new(1, 0, None);
    let mut expected: u64 = 0;

    for delta in deltas {
        node.add_weight(delta);
        expected = if delta < 0 {
            expected.saturating_sub(delta.unsigned_abs())
        } else {
            expected + delta as u64
        };
        assert_eq!(node.dynamic_weight(), expected);
    }
    assert_eq!(node.dynamic_weight(), 0);
}

#[test]
fn test_signed_base_weight_ignores_negative() {
    let mut node = Node::new(1, 8, None);
    node.set_base_weight_signed(-1);
    assert_eq!(node.base_weight(), 8);

    node.set_base_weight_signed(2);
    assert_eq!(node.base_weight(), 2);

    node.set_base_weight(11);
    assert_eq!(node.base_weight(), 11);
}

#[test]
fn test_enable_flag() {
    let mut edge = Edge::new(1, 1, 2, EdgeDirection::Mutual, 1);
    assert!(edge.is_enabled());

    edge.disable();
    assert!(!edge.is_enabled());
    // disabling does not touch the weight
    assert_eq!(edge.weight(), 1);

    edge.enable();
    assert!(edge.is_enabled());
}

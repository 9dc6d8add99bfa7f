//! Tests for node construction, equality and in-place editing.

use treenav::Node;

// ============================================================
// Construction Tests
// ============================================================

#[test]
fn given_default_node_when_pushing_child_then_child_is_stored() {
    let mut node = Node::<i32>::default();
    node.children.push(Node::new(35));

    assert_eq!(node.children.len(), 1);
    assert_eq!(node.children[0].value, 35);
}

#[test]
fn given_value_and_children_when_constructing_then_both_are_stored() {
    let node = Node::branch(1, [34, 45]);

    assert_eq!(node.value, 1);
    assert_eq!(node.children.len(), 2);
    assert!(node.children.iter().all(Node::is_leaf));
}

#[test]
fn given_prebuilt_child_vector_when_constructing_then_children_are_taken() {
    let children = vec![Node::new(10), Node::new(20)];
    assert_eq!(children.len(), 2);

    let node = Node::branch(13, children);

    assert_eq!(node.value, 13);
    assert_eq!(node.children.len(), 2);
    assert_eq!(node.children[0].value, 10);
    assert_eq!(node.children[1].value, 20);
}

#[test]
fn given_children_only_when_constructing_then_value_is_default() {
    let node: Node<i32> = Node::from_children(vec![34.into(), 45.into()]);

    assert_eq!(node.value, 0);
    assert_eq!(node.children.len(), 2);
}

#[test]
fn given_node_iterator_when_collecting_then_default_valued_parent_is_built() {
    let node: Node<i32> = (1..=3).map(Node::new).collect();

    assert_eq!(node.value, 0);
    assert_eq!(node.children.len(), 3);
    assert_eq!(node.children[2].value, 3);
}

#[test]
fn given_nested_literals_when_constructing_then_structure_matches() {
    let node: Node<i32> = Node::from_children(vec![
        Node::from_children(vec![34.into(), 45.into()]),
        Node::from_children(vec![
            Node::from_children(vec![78.into(), 89.into(), 96.into()]),
            Node::from_children(vec![32.into(), 64.into(), 128.into()]),
            Node::branch(42, [98, 99, 100]),
        ]),
    ]);

    assert_eq!(node.children.len(), 2);

    assert_eq!(node.children[0].children.len(), 2);
    assert_eq!(node.children[0].children[0].value, 34);
    assert_eq!(node.children[0].children[1].value, 45);

    assert_eq!(node.children[1].children.len(), 3);
    assert_eq!(node.children[1].children[0].children.len(), 3);
    assert_eq!(node.children[1].children[1].children.len(), 3);

    assert_eq!(node.children[1].children[2].value, 42);
    assert_eq!(node.children[1].children[2].children[0].value, 98);
    assert_eq!(node.children[1].children[2].children[1].value, 99);
    assert_eq!(node.children[1].children[2].children[2].value, 100);
}

// ============================================================
// Ownership Transfer Tests
// ============================================================

#[test]
fn given_two_subtrees_when_moving_children_then_source_is_emptied() {
    let mut node: Node<i32> = Node::from_children(vec![
        Node::from_children(vec![34.into(), 45.into()]),
        Node::from_children(vec![
            Node::from_children(vec![78.into(), 89.into(), 96.into()]),
            Node::from_children(vec![32.into(), 64.into(), 128.into()]),
            Node::branch(42, [98, 99, 100]),
        ]),
    ]);

    node.children[0].children = std::mem::take(&mut node.children[1].children);

    assert_eq!(node.children.len(), 2);
    assert_eq!(node.children[0].children.len(), 3);
    assert_eq!(node.children[0].children[2].value, 42);
    assert_eq!(node.children[0].children[2].children[2].value, 100);
    assert!(node.children[1].children.is_empty());
}

#[test]
fn given_two_subtrees_when_cloning_children_then_source_is_kept() {
    let mut node: Node<i32> = Node::from_children(vec![
        Node::from_children(vec![34.into(), 45.into()]),
        Node::branch(2, [Node::branch(42, [98, 99, 100])]),
    ]);

    node.children[0].children = node.children[1].children.clone();

    assert_eq!(node.children[0].children, node.children[1].children);
    assert_eq!(node.children[1].children.len(), 1);
}

// ============================================================
// Equality Tests
// ============================================================

#[test]
fn given_equal_structures_when_comparing_then_nodes_are_equal() {
    let build = || {
        Node::branch(
            10,
            [
                Node::branch(13, [34, 45]),
                Node::branch(
                    11,
                    [
                        Node::branch(14, [78, 89, 96]),
                        Node::branch(15, [32, 64, 128]),
                        Node::branch(42, [98, 99, 100]),
                    ],
                ),
            ],
        )
    };
    let t1 = build();
    let t2 = build();

    assert_eq!(t1.children[0].value, t2.children[0].value);
    assert_eq!(t1, t2);
    assert_eq!(t1, t1.clone());
}

#[test]
fn given_differing_subtree_when_comparing_then_nodes_are_not_equal() {
    let t1 = Node::branch(1, [34, 45]);
    let mut t2 = t1.clone();
    t2.children[1].value = 46;

    assert_ne!(t1, t2);
}

#[test]
fn given_node_when_comparing_against_payload_then_children_are_ignored() {
    let node = Node::branch(42, [98, 99, 100]);

    assert!(node == 42);
    assert!(node != 43);
    // Structural comparison against a childless node still differs.
    assert!(node != Node::new(42));
}

// ============================================================
// Display Tests
// ============================================================

#[test]
fn given_node_when_formatting_then_only_payload_is_shown() {
    let node = Node::branch(5, [1, 2]);

    assert_eq!(format!("{node}"), "5");
}

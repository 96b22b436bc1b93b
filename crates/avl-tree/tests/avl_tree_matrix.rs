use avl_tree::{AvlTree, InvariantError};

fn build(keys: &[i64]) -> AvlTree<i64> {
    let mut tree = AvlTree::new();
    for &k in keys {
        tree.insert(k);
        tree.assert_valid().unwrap();
    }
    tree
}

fn pre_order(tree: &AvlTree<i64>) -> Vec<i64> {
    tree.pre_order().copied().collect()
}

fn in_order(tree: &AvlTree<i64>) -> Vec<i64> {
    tree.in_order().copied().collect()
}

fn heights(tree: &AvlTree<i64>) -> Vec<(i64, u32)> {
    tree.level_order().map(|e| (*e.key, e.height)).collect()
}

#[test]
fn insert_rotation_cases_matrix() {
    // Right-Right, Left-Right, Left-Left and Right-Left all settle on the
    // same three-node shape.
    for keys in [[10i64, 20, 30], [30, 10, 20], [30, 20, 10], [10, 30, 20]] {
        let tree = build(&keys);
        assert_eq!(tree.root_key(), Some(&20), "{keys:?}");
        assert_eq!(heights(&tree), vec![(20, 2), (10, 1), (30, 1)], "{keys:?}");
        assert_eq!(tree.height(), 2);
    }
}

#[test]
fn duplicate_insert_is_noop_matrix() {
    let mut tree = build(&[10, 20, 30, 40]);
    let before = (pre_order(&tree), heights(&tree), tree.len());
    assert!(!tree.insert(20));
    assert!(!tree.insert(40));
    assert_eq!((pre_order(&tree), heights(&tree), tree.len()), before);
    tree.assert_valid().unwrap();
}

#[test]
fn delete_absent_key_is_noop_matrix() {
    let mut tree = build(&[10, 20, 30, 40]);
    let before = (pre_order(&tree), heights(&tree));
    assert!(!tree.delete(&25));
    assert!(!tree.delete(&-1));
    assert_eq!((pre_order(&tree), heights(&tree)), before);

    let mut empty = AvlTree::<i64>::new();
    assert!(!empty.delete(&1));
    assert!(empty.is_empty());
}

#[test]
fn delete_rebalance_cases_matrix() {
    let cases: [(&[i64], i64, &[i64]); 7] = [
        // Left child leaning left: single right rotation.
        (&[20, 10, 30, 5], 30, &[10, 5, 20]),
        // Left child leaning right: left then right rotation.
        (&[20, 10, 30, 15], 30, &[15, 10, 20]),
        // Left child perfectly balanced: single rotation still applies.
        (&[20, 10, 30, 5, 15], 30, &[10, 5, 20, 15]),
        (&[20, 10, 30, 25], 10, &[25, 20, 30]),
        (&[20, 10, 30, 35], 10, &[30, 20, 35]),
        (&[20, 10, 30, 25, 35], 10, &[30, 20, 25, 35]),
        // Two children: successor key is copied up.
        (&[20, 10, 30], 20, &[30, 10]),
    ];
    for (keys, key, expected) in cases {
        let mut tree = build(keys);
        assert!(tree.delete(&key));
        assert_eq!(pre_order(&tree), expected, "{keys:?} - {key}");
        assert!(!tree.search(&key));
        tree.assert_valid().unwrap();
    }
}

#[test]
fn delete_balanced_left_child_heights_matrix() {
    let mut tree = build(&[20, 10, 30, 5, 15]);
    tree.delete(&30);
    assert_eq!(heights(&tree), vec![(10, 3), (5, 1), (20, 2), (15, 1)]);
}

#[test]
fn end_to_end_matrix() {
    let mut tree = build(&[10, 20, 30, 40, 50, 25, 15, 5, 60, 70]);
    assert_eq!(pre_order(&tree), vec![30, 20, 10, 5, 15, 25, 50, 40, 60, 70]);
    assert_eq!(tree.height(), 4);
    assert!(tree.search(&25));
    assert!(!tree.search(&100));

    assert!(tree.delete(&20));
    tree.assert_valid().unwrap();
    assert!(tree.delete(&30));
    tree.assert_valid().unwrap();

    assert_eq!(in_order(&tree), vec![5, 10, 15, 25, 40, 50, 60, 70]);
    assert_eq!(pre_order(&tree), vec![40, 10, 5, 25, 15, 60, 50, 70]);
    assert_eq!(tree.len(), 8);
}

#[test]
fn delete_rebalances_multiple_ancestors_matrix() {
    let mut tree = build(&[17, 30, 29, 23, 24, 5, 3, 8, 33, 16, 15, 18]);
    assert!(tree.delete(&24));
    tree.assert_valid().unwrap();
    assert_eq!(pre_order(&tree), vec![16, 8, 5, 3, 15, 23, 17, 18, 30, 29, 33]);
}

#[test]
fn drain_to_empty_matrix() {
    let keys: Vec<i64> = (0..64).collect();
    let mut tree = build(&keys);
    for k in keys.iter().rev().step_by(2) {
        assert!(tree.delete(k));
        tree.assert_valid().unwrap();
    }
    for k in keys.iter().step_by(2) {
        assert!(tree.delete(k));
        tree.assert_valid().unwrap();
    }
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.height(), 0);
    assert_eq!(tree.root_key(), None);
}

#[test]
fn slots_are_reused_after_delete_matrix() {
    let mut tree = build(&[1, 2, 3, 4, 5, 6, 7, 8]);
    assert_eq!(tree.slot_count(), 8);
    for round in 0..10 {
        assert!(tree.delete(&(round % 8 + 1)));
        assert!(tree.insert(round % 8 + 1));
    }
    assert_eq!(tree.slot_count(), 8);
    assert_eq!(tree.len(), 8);
    tree.assert_valid().unwrap();
}

#[test]
fn misc_api_matrix() {
    let mut tree = AvlTree::<i64>::new();
    assert!(tree.is_empty());
    assert_eq!(tree.min(), None);
    assert_eq!(tree.max(), None);
    assert_eq!(tree.to_string(), "AvlTree ∅");

    tree.extend([5, -3, 12, 0]);
    assert_eq!(tree.len(), 4);
    assert_eq!(tree.min(), Some(&-3));
    assert_eq!(tree.max(), Some(&12));
    assert!(tree.contains(&0));
    assert_eq!(format!("{tree:?}"), "AvlTree { len: 4, keys: [-3, 0, 5, 12] }");

    let copy = tree.clone();
    tree.clear();
    assert!(tree.is_empty());
    assert_eq!(tree.slot_count(), 0);
    assert_eq!(copy.len(), 4);
    copy.assert_valid().unwrap();

    let collected: AvlTree<i64> = (1..=3).collect();
    assert_eq!(collected.to_string(), "AvlTree\n└─ 2 [h=2]\n  ← 1 [h=1]\n  → 3 [h=1]");
}

#[test]
fn assert_valid_accepts_empty_matrix() {
    let tree = AvlTree::<i64>::new();
    assert_eq!(tree.assert_valid(), Ok::<(), InvariantError>(()));
}

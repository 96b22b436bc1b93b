use avl_tree::{AvlTree, LevelEntry};

fn demo_tree() -> AvlTree<i64> {
    [10, 20, 30, 40, 50, 25, 15, 5, 60, 70].into_iter().collect()
}

#[test]
fn in_order_is_ascending_matrix() {
    let tree = demo_tree();
    let keys: Vec<i64> = tree.in_order().copied().collect();
    assert_eq!(keys, vec![5, 10, 15, 20, 25, 30, 40, 50, 60, 70]);
}

#[test]
fn pre_order_matrix() {
    let tree = demo_tree();
    let keys: Vec<i64> = tree.pre_order().copied().collect();
    assert_eq!(keys, vec![30, 20, 10, 5, 15, 25, 50, 40, 60, 70]);
}

#[test]
fn level_order_matrix() {
    let tree = demo_tree();
    let entries: Vec<(i64, u32, usize)> = tree
        .level_order()
        .map(|e| (*e.key, e.height, e.depth))
        .collect();
    assert_eq!(
        entries,
        vec![
            (30, 4, 0),
            (20, 3, 1),
            (50, 3, 1),
            (10, 2, 2),
            (25, 1, 2),
            (40, 1, 2),
            (60, 2, 2),
            (5, 1, 3),
            (15, 1, 3),
            (70, 1, 3),
        ]
    );
}

#[test]
fn levels_grouped_by_depth_matrix() {
    let tree = demo_tree();
    let levels: Vec<Vec<i64>> = tree
        .levels()
        .iter()
        .map(|level| level.iter().map(|e| *e.key).collect())
        .collect();
    assert_eq!(
        levels,
        vec![
            vec![30],
            vec![20, 50],
            vec![10, 25, 40, 60],
            vec![5, 15, 70]
        ]
    );
    assert_eq!(
        tree.levels()[0][0],
        LevelEntry {
            key: &30,
            height: 4,
            depth: 0
        }
    );
}

#[test]
fn traversals_are_lazy_matrix() {
    let tree = demo_tree();
    let mut it = tree.in_order();
    assert_eq!(it.next(), Some(&5));
    assert_eq!(it.next(), Some(&10));
    let first_two: Vec<&i64> = tree.pre_order().take(2).collect();
    assert_eq!(first_two, vec![&30, &20]);
}

#[test]
fn empty_traversals_matrix() {
    let tree = AvlTree::<i64>::new();
    assert_eq!(tree.in_order().next(), None);
    assert_eq!(tree.pre_order().next(), None);
    assert_eq!(tree.level_order().next(), None);
    assert!(tree.levels().is_empty());
}

#[test]
fn render_structure_matrix() {
    let mut tree = demo_tree();
    tree.delete(&20);
    tree.delete(&30);
    let expected = concat!(
        "        70(h=1)\n",
        "    60(h=2)\n",
        "        50(h=1)\n",
        "40(h=4)\n",
        "        25(h=2)\n",
        "            15(h=1)\n",
        "    10(h=3)\n",
        "        5(h=1)\n",
    );
    assert_eq!(tree.render_structure(), expected);
}

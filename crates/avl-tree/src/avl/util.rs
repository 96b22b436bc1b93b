//! Recursive AVL algorithms over a [`NodeArena`].
//!
//! Every mutating function takes a subtree root and returns the root of the
//! rebuilt subtree; the caller stores it back into the parent link. Heights
//! are recomputed bottom-up on the way out of each call frame, so a node's
//! stored height is never stale once the frame that touched it returns.

use std::cmp::Ordering;
use std::fmt::Debug;

use crate::arena::NodeArena;
use crate::error::InvariantError;
use crate::observer::{Imbalance, Observer, Rotation};

use super::types::AvlNodeLike;

/// Stored height of `node`, 0 when absent.
#[inline]
pub fn height<N: AvlNodeLike>(arena: &NodeArena<N>, node: Option<u32>) -> u32 {
    node.map_or(0, |i| arena[i].height())
}

/// `height(left) - height(right)`, 0 when absent.
#[inline]
pub fn balance_factor<N: AvlNodeLike>(arena: &NodeArena<N>, node: Option<u32>) -> i32 {
    match node {
        None => 0,
        Some(i) => height(arena, arena[i].l()) as i32 - height(arena, arena[i].r()) as i32,
    }
}

#[inline]
pub fn update_height<N: AvlNodeLike>(arena: &mut NodeArena<N>, i: u32) {
    let h = 1 + height(arena, arena[i].l()).max(height(arena, arena[i].r()));
    arena[i].set_height(h);
}

/// Rotates `y` right around its left child and returns the new subtree root.
///
/// # Panics
///
/// If `y` has no left child.
pub fn rotate_right<N, O>(arena: &mut NodeArena<N>, y: u32, observer: &mut O) -> u32
where
    N: AvlNodeLike,
    O: Observer<N::Key>,
{
    let x = arena[y].l().expect("right rotation needs a left child");
    let t2 = arena[x].r();
    arena[x].set_r(Some(y));
    arena[y].set_l(t2);
    // y is now below x, so its height has to be settled first.
    update_height(arena, y);
    update_height(arena, x);
    observer.on_rotate(Rotation::Right, arena[y].key());
    x
}

/// Rotates `x` left around its right child and returns the new subtree root.
///
/// # Panics
///
/// If `x` has no right child.
pub fn rotate_left<N, O>(arena: &mut NodeArena<N>, x: u32, observer: &mut O) -> u32
where
    N: AvlNodeLike,
    O: Observer<N::Key>,
{
    let y = arena[x].r().expect("left rotation needs a right child");
    let t2 = arena[y].l();
    arena[y].set_l(Some(x));
    arena[x].set_r(t2);
    update_height(arena, x);
    update_height(arena, y);
    observer.on_rotate(Rotation::Left, arena[x].key());
    y
}

/// Applies the rotations for `case` at `n` and returns the new subtree root.
fn rebalance<N, O>(arena: &mut NodeArena<N>, n: u32, case: Imbalance, observer: &mut O) -> u32
where
    N: AvlNodeLike,
    O: Observer<N::Key>,
{
    match case {
        Imbalance::LeftLeft => rotate_right(arena, n, observer),
        Imbalance::LeftRight => {
            let l = arena[n].l().expect("left-heavy node has a left child");
            let l = rotate_left(arena, l, observer);
            arena[n].set_l(Some(l));
            rotate_right(arena, n, observer)
        }
        Imbalance::RightRight => rotate_left(arena, n, observer),
        Imbalance::RightLeft => {
            let r = arena[n].r().expect("right-heavy node has a right child");
            let r = rotate_right(arena, r, observer);
            arena[n].set_r(Some(r));
            rotate_left(arena, n, observer)
        }
    }
}

/// Inserts `key` below `node`.
///
/// Returns the new subtree root and the slot of the created node, or `None`
/// in the second position when `key` was already present (the subtree is
/// then untouched).
pub fn insert<N, O>(
    arena: &mut NodeArena<N>,
    node: Option<u32>,
    key: N::Key,
    observer: &mut O,
) -> (u32, Option<u32>)
where
    N: AvlNodeLike,
    N::Key: Ord,
    O: Observer<N::Key>,
{
    let Some(n) = node else {
        observer.on_insert(&key);
        let created = arena.alloc(N::leaf(key));
        return (created, Some(created));
    };

    let created = match key.cmp(arena[n].key()) {
        Ordering::Less => {
            let l = arena[n].l();
            let (l, created) = insert(arena, l, key, observer);
            arena[n].set_l(Some(l));
            created
        }
        Ordering::Greater => {
            let r = arena[n].r();
            let (r, created) = insert(arena, r, key, observer);
            arena[n].set_r(Some(r));
            created
        }
        Ordering::Equal => {
            observer.on_duplicate(&key);
            None
        }
    };
    let Some(created) = created else {
        return (n, None);
    };

    update_height(arena, n);
    let balance = balance_factor(arena, Some(n));

    // A single insertion unbalances at most one node on the path, and the
    // inserted key alone tells which grandchild subtree grew.
    let case = {
        let key = arena[created].key();
        if balance > 1 {
            let l = arena[n].l().expect("left-heavy node has a left child");
            match key.cmp(arena[l].key()) {
                Ordering::Less => Some(Imbalance::LeftLeft),
                Ordering::Greater => Some(Imbalance::LeftRight),
                Ordering::Equal => None,
            }
        } else if balance < -1 {
            let r = arena[n].r().expect("right-heavy node has a right child");
            match key.cmp(arena[r].key()) {
                Ordering::Greater => Some(Imbalance::RightRight),
                Ordering::Less => Some(Imbalance::RightLeft),
                Ordering::Equal => None,
            }
        } else {
            None
        }
    };

    match case {
        Some(case) => {
            observer.on_imbalance(case, arena[n].key(), false);
            (rebalance(arena, n, case, observer), Some(created))
        }
        None => (n, Some(created)),
    }
}

/// Removes `key` from below `node`.
///
/// Returns the new subtree root and whether a node was removed. A missing
/// key leaves the subtree untouched.
pub fn remove<N, O>(
    arena: &mut NodeArena<N>,
    node: Option<u32>,
    key: &N::Key,
    observer: &mut O,
) -> (Option<u32>, bool)
where
    N: AvlNodeLike,
    N::Key: Ord + Clone,
    O: Observer<N::Key>,
{
    let Some(n) = node else {
        return (None, false);
    };

    let removed = match key.cmp(arena[n].key()) {
        Ordering::Less => {
            let l = arena[n].l();
            let (l, removed) = remove(arena, l, key, observer);
            arena[n].set_l(l);
            removed
        }
        Ordering::Greater => {
            let r = arena[n].r();
            let (r, removed) = remove(arena, r, key, observer);
            arena[n].set_r(r);
            removed
        }
        Ordering::Equal => match (arena[n].l(), arena[n].r()) {
            (Some(_), Some(r)) => {
                let successor = arena[min_node(arena, r)].key().clone();
                observer.on_successor(arena[n].key(), &successor);
                let (r, _) = remove(arena, Some(r), &successor, observer);
                arena[n].set_r(r);
                arena[n].set_key(successor);
                true
            }
            (child, None) | (None, child) => {
                observer.on_delete(arena[n].key());
                arena.release(n);
                return (child, true);
            }
        },
    };
    if !removed {
        return (Some(n), false);
    }

    update_height(arena, n);
    let balance = balance_factor(arena, Some(n));

    // Unlike insertion, the child may be perfectly balanced here, and more
    // than one ancestor can need fixing on the way up.
    let case = if balance > 1 {
        if balance_factor(arena, arena[n].l()) >= 0 {
            Imbalance::LeftLeft
        } else {
            Imbalance::LeftRight
        }
    } else if balance < -1 {
        if balance_factor(arena, arena[n].r()) <= 0 {
            Imbalance::RightRight
        } else {
            Imbalance::RightLeft
        }
    } else {
        return (Some(n), true);
    };

    observer.on_imbalance(case, arena[n].key(), true);
    (Some(rebalance(arena, n, case, observer)), true)
}

/// Leftmost node of the subtree rooted at `node`.
pub fn min_node<N: AvlNodeLike>(arena: &NodeArena<N>, mut node: u32) -> u32 {
    while let Some(l) = arena[node].l() {
        node = l;
    }
    node
}

/// Rightmost node of the subtree rooted at `node`.
pub fn max_node<N: AvlNodeLike>(arena: &NodeArena<N>, mut node: u32) -> u32 {
    while let Some(r) = arena[node].r() {
        node = r;
    }
    node
}

/// Slot holding `key`, by recursive descent.
pub fn find<N>(arena: &NodeArena<N>, node: Option<u32>, key: &N::Key) -> Option<u32>
where
    N: AvlNodeLike,
    N::Key: Ord,
{
    let n = node?;
    match key.cmp(arena[n].key()) {
        Ordering::Less => find(arena, arena[n].l(), key),
        Ordering::Greater => find(arena, arena[n].r(), key),
        Ordering::Equal => Some(n),
    }
}

/// Checks order, stored heights and balance below `root`.
///
/// Returns the number of reachable nodes.
pub fn assert_avl_tree<N>(arena: &NodeArena<N>, root: Option<u32>) -> Result<usize, InvariantError>
where
    N: AvlNodeLike,
    N::Key: Ord + Debug,
{
    fn validate<N>(
        arena: &NodeArena<N>,
        node: Option<u32>,
        lower: Option<&N::Key>,
        upper: Option<&N::Key>,
        count: &mut usize,
    ) -> Result<u32, InvariantError>
    where
        N: AvlNodeLike,
        N::Key: Ord + Debug,
    {
        let Some(n) = node else {
            return Ok(0);
        };
        let key = arena[n].key();
        let below = lower.map_or(false, |lo| key <= lo);
        let above = upper.map_or(false, |hi| key >= hi);
        if below || above {
            return Err(InvariantError::OrderViolated {
                key: format!("{key:?}"),
            });
        }
        *count += 1;

        let lh = validate(arena, arena[n].l(), lower, Some(key), count)?;
        let rh = validate(arena, arena[n].r(), Some(key), upper, count)?;
        let actual = 1 + lh.max(rh);
        let stored = arena[n].height();
        if stored != actual {
            return Err(InvariantError::HeightMismatch {
                key: format!("{key:?}"),
                stored,
                actual,
            });
        }
        let balance = lh as i32 - rh as i32;
        if !(-1..=1).contains(&balance) {
            return Err(InvariantError::Unbalanced {
                key: format!("{key:?}"),
                balance,
            });
        }
        Ok(actual)
    }

    let mut count = 0;
    validate(arena, root, None, None, &mut count)?;
    Ok(count)
}

/// Debug dump of the subtree rooted at `node`.
pub fn print<N>(arena: &NodeArena<N>, node: Option<u32>, tab: &str) -> String
where
    N: AvlNodeLike,
    N::Key: Debug,
{
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i];
            let left = print(arena, n.l(), &format!("{tab}  "));
            let right = print(arena, n.r(), &format!("{tab}  "));
            format!(
                "Node[{i}] [h={}] {:?}\n{tab}L={left}\n{tab}R={right}",
                n.height(),
                n.key()
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::types::AvlNode;
    use super::*;
    use crate::observer::{EventLog, TreeEvent};
    use crate::types::Node;

    fn build(keys: &[i32]) -> (NodeArena<AvlNode<i32>>, Option<u32>) {
        let mut arena = NodeArena::new();
        let mut root = None;
        for &k in keys {
            root = Some(insert(&mut arena, root, k, &mut ()).0);
        }
        (arena, root)
    }

    #[test]
    fn test_height_and_balance_of_absent_node() {
        let arena: NodeArena<AvlNode<i32>> = NodeArena::new();
        assert_eq!(height(&arena, None), 0);
        assert_eq!(balance_factor(&arena, None), 0);
    }

    #[test]
    fn test_rotate_right_relinks_and_updates_heights() {
        // Hand-built left chain 3 -> 2 -> 1, heights left stale on purpose.
        let mut arena = NodeArena::new();
        let n1 = arena.alloc(AvlNode::new(1));
        let n2 = arena.alloc(AvlNode::new(2));
        let n3 = arena.alloc(AvlNode::new(3));
        arena[n3].set_l(Some(n2));
        arena[n2].set_l(Some(n1));

        let mut log = EventLog::new();
        let root = rotate_right(&mut arena, n3, &mut log);
        assert_eq!(root, n2);
        assert_eq!(arena[n2].l(), Some(n1));
        assert_eq!(arena[n2].r(), Some(n3));
        assert_eq!(arena[n3].l(), None);
        assert_eq!(arena[n3].h, 1);
        assert_eq!(arena[n2].h, 2);
        assert_eq!(
            log.events(),
            &[TreeEvent::Rotated {
                direction: Rotation::Right,
                pivot: 3
            }]
        );
    }

    #[test]
    fn test_rotate_left_moves_inner_subtree() {
        let (mut arena, root) = build(&[2, 1, 4, 3, 5]);
        let root = root.unwrap();
        let new_root = rotate_left(&mut arena, root, &mut ());
        assert_eq!(arena[new_root].k, 4);
        let l = arena[new_root].l().unwrap();
        assert_eq!(arena[l].k, 2);
        // 4's former left subtree (3) becomes 2's right subtree.
        assert_eq!(arena[arena[l].r().unwrap()].k, 3);
        assert_eq!(arena[l].h, 2);
        assert_eq!(arena[new_root].h, 3);
    }

    #[test]
    #[should_panic(expected = "left rotation needs a right child")]
    fn test_rotate_left_without_right_child_is_a_defect() {
        let (mut arena, root) = build(&[1]);
        rotate_left(&mut arena, root.unwrap(), &mut ());
    }

    #[test]
    fn test_min_max_find() {
        let (arena, root) = build(&[50, 20, 80, 10, 30, 90]);
        let r = root.unwrap();
        assert_eq!(arena[min_node(&arena, r)].k, 10);
        assert_eq!(arena[max_node(&arena, r)].k, 90);
        assert!(find(&arena, root, &30).is_some());
        assert!(find(&arena, root, &31).is_none());
        assert_eq!(assert_avl_tree(&arena, root), Ok(6));
    }

    #[test]
    fn test_assert_avl_tree_reports_stale_height() {
        let (mut arena, root) = build(&[2, 1, 3]);
        arena[root.unwrap()].h = 5;
        assert_eq!(
            assert_avl_tree(&arena, root),
            Err(InvariantError::HeightMismatch {
                key: "2".to_string(),
                stored: 5,
                actual: 2
            })
        );
    }

    #[test]
    fn test_assert_avl_tree_reports_order_violation() {
        let (mut arena, root) = build(&[2, 1, 3]);
        let l = arena[root.unwrap()].l().unwrap();
        arena[l].k = 7;
        assert!(matches!(
            assert_avl_tree(&arena, root),
            Err(InvariantError::OrderViolated { .. })
        ));
    }

    #[test]
    fn test_print() {
        let (arena, root) = build(&[2, 1]);
        let out = print(&arena, root, "");
        assert!(out.starts_with("Node[0] [h=2] 2\nL=Node[1] [h=1] 1"));
        assert!(out.ends_with("R=∅"));
    }
}

use std::fmt::{self, Debug, Display};

use crate::arena::NodeArena;
use crate::error::InvariantError;
use crate::observer::Observer;
use crate::print::{print_tree, render_structure};
use crate::traverse::{InOrder, LevelEntry, LevelOrder, PreOrder};
use crate::types::KeyNode;

use super::types::AvlNode;
use super::util::{assert_avl_tree, find, height, insert, max_node, min_node, print, remove};

/// AVL tree of unique keys.
///
/// Owns every node through a [`NodeArena`] and reports structural events to
/// an [`Observer`] of type `O` (the no-op `()` by default).
///
/// # Examples
///
/// ```
/// use avl_tree::AvlTree;
///
/// let mut tree = AvlTree::new();
/// for key in [10, 20, 30] {
///     tree.insert(key);
/// }
/// assert_eq!(tree.root_key(), Some(&20));
/// assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), vec![10, 20, 30]);
/// assert!(tree.search(&30));
/// assert!(!tree.search(&40));
/// ```
#[derive(Clone)]
pub struct AvlTree<K, O = ()> {
    root: Option<u32>,
    arena: NodeArena<AvlNode<K>>,
    observer: O,
}

impl<K: Ord + Clone> AvlTree<K> {
    pub fn new() -> Self {
        Self::with_observer(())
    }
}

impl<K: Ord + Clone> Default for AvlTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, O> AvlTree<K, O>
where
    K: Ord + Clone,
    O: Observer<K>,
{
    pub fn with_observer(observer: O) -> Self {
        Self {
            root: None,
            arena: NodeArena::new(),
            observer,
        }
    }

    /// Inserts `key`. Returns `false` and leaves the tree untouched when the
    /// key is already present.
    pub fn insert(&mut self, key: K) -> bool {
        let (root, created) = insert(&mut self.arena, self.root, key, &mut self.observer);
        self.root = Some(root);
        created.is_some()
    }

    /// Deletes `key`. Returns `false` and leaves the tree untouched when the
    /// key is absent.
    pub fn delete(&mut self, key: &K) -> bool {
        let (root, removed) = remove(&mut self.arena, self.root, key, &mut self.observer);
        self.root = root;
        removed
    }

    pub fn search(&mut self, key: &K) -> bool {
        let found = self.contains(key);
        if found {
            self.observer.on_search_hit(key);
        } else {
            self.observer.on_search_miss(key);
        }
        found
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }
}

impl<K, O> AvlTree<K, O> {
    /// Like [`search`](Self::search), without notifying the observer.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        find(&self.arena, self.root, key).is_some()
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the root, 0 for an empty tree.
    pub fn height(&self) -> u32 {
        height(&self.arena, self.root)
    }

    pub fn root_key(&self) -> Option<&K> {
        self.root.map(|i| self.arena[i].key())
    }

    pub fn min(&self) -> Option<&K> {
        self.root.map(|i| self.arena[min_node(&self.arena, i)].key())
    }

    pub fn max(&self) -> Option<&K> {
        self.root.map(|i| self.arena[max_node(&self.arena, i)].key())
    }

    /// Drops every node.
    pub fn clear(&mut self) {
        self.root = None;
        self.arena.clear();
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Keys in ascending order.
    pub fn in_order(&self) -> InOrder<'_, AvlNode<K>> {
        InOrder::new(&self.arena, self.root)
    }

    /// Keys in root, left, right order.
    pub fn pre_order(&self) -> PreOrder<'_, AvlNode<K>> {
        PreOrder::new(&self.arena, self.root)
    }

    /// Nodes breadth-first with their height and depth.
    pub fn level_order(&self) -> LevelOrder<'_, AvlNode<K>> {
        LevelOrder::new(&self.arena, self.root)
    }

    /// Breadth-first nodes grouped by depth.
    pub fn levels(&self) -> Vec<Vec<LevelEntry<'_, K>>> {
        let mut levels: Vec<Vec<LevelEntry<'_, K>>> = Vec::new();
        for entry in self.level_order() {
            if levels.len() == entry.depth {
                levels.push(Vec::new());
            }
            levels[entry.depth].push(entry);
        }
        levels
    }

    /// Checks order, heights and balance at every node, and that the
    /// tracked size matches the reachable node count.
    pub fn assert_valid(&self) -> Result<(), InvariantError>
    where
        K: Ord + Debug,
    {
        let reachable = assert_avl_tree(&self.arena, self.root)?;
        if reachable != self.arena.len() {
            return Err(InvariantError::SizeMismatch {
                tracked: self.arena.len(),
                reachable,
            });
        }
        Ok(())
    }

    /// Sideways rendering: right subtree on top, one `key(h=height)` per line.
    pub fn render_structure(&self) -> String
    where
        K: Display,
    {
        render_structure(&self.arena, self.root)
    }

    /// Debug dump of the backing arena.
    pub fn print(&self) -> String
    where
        K: Debug,
    {
        print(&self.arena, self.root, "")
    }

    /// Number of arena slots ever allocated.
    pub fn slot_count(&self) -> usize {
        self.arena.slot_count()
    }
}

impl<K: Display, O> Display for AvlTree<K, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root {
            Some(root) => write!(f, "AvlTree{}", print_tree(&self.arena, root, "", "└─")),
            None => f.write_str("AvlTree ∅"),
        }
    }
}

impl<K: Debug, O> Debug for AvlTree<K, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AvlTree")
            .field("len", &self.arena.len())
            .field("keys", &self.in_order().collect::<Vec<_>>())
            .finish()
    }
}

impl<K: Ord + Clone> FromIterator<K> for AvlTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K, O> Extend<K> for AvlTree<K, O>
where
    K: Ord + Clone,
    O: Observer<K>,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

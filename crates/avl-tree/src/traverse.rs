//! Read-only traversals.
//!
//! Each traversal is a lazy, single-pass iterator borrowing the arena; the
//! explicit stacks/queues replace recursion so iteration depth is not tied
//! to the call stack.

use std::collections::VecDeque;

use crate::arena::NodeArena;
use crate::avl::AvlNodeLike;

/// In-order (ascending key) traversal.
pub struct InOrder<'a, N> {
    arena: &'a NodeArena<N>,
    stack: Vec<u32>,
    curr: Option<u32>,
}

impl<'a, N> InOrder<'a, N> {
    pub fn new(arena: &'a NodeArena<N>, root: Option<u32>) -> Self {
        Self {
            arena,
            stack: Vec::new(),
            curr: root,
        }
    }
}

impl<'a, N: AvlNodeLike> Iterator for InOrder<'a, N> {
    type Item = &'a N::Key;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(i) = self.curr {
            self.stack.push(i);
            self.curr = self.arena[i].l();
        }
        let i = self.stack.pop()?;
        self.curr = self.arena[i].r();
        Some(self.arena[i].key())
    }
}

/// Pre-order (root, left, right) traversal.
pub struct PreOrder<'a, N> {
    arena: &'a NodeArena<N>,
    stack: Vec<u32>,
}

impl<'a, N> PreOrder<'a, N> {
    pub fn new(arena: &'a NodeArena<N>, root: Option<u32>) -> Self {
        Self {
            arena,
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, N: AvlNodeLike> Iterator for PreOrder<'a, N> {
    type Item = &'a N::Key;

    fn next(&mut self) -> Option<Self::Item> {
        let i = self.stack.pop()?;
        let node = &self.arena[i];
        self.stack.extend(node.r());
        self.stack.extend(node.l());
        Some(node.key())
    }
}

/// One node visited by [`LevelOrder`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelEntry<'a, K> {
    pub key: &'a K,
    /// Height of the node's subtree.
    pub height: u32,
    /// Distance from the root, the root is at depth 0.
    pub depth: usize,
}

/// Breadth-first traversal, left to right within a level.
pub struct LevelOrder<'a, N> {
    arena: &'a NodeArena<N>,
    queue: VecDeque<(u32, usize)>,
}

impl<'a, N> LevelOrder<'a, N> {
    pub fn new(arena: &'a NodeArena<N>, root: Option<u32>) -> Self {
        Self {
            arena,
            queue: root.map(|i| (i, 0)).into_iter().collect(),
        }
    }
}

impl<'a, N: AvlNodeLike> Iterator for LevelOrder<'a, N> {
    type Item = LevelEntry<'a, N::Key>;

    fn next(&mut self) -> Option<Self::Item> {
        let (i, depth) = self.queue.pop_front()?;
        let node = &self.arena[i];
        self.queue.extend(node.l().map(|l| (l, depth + 1)));
        self.queue.extend(node.r().map(|r| (r, depth + 1)));
        Some(LevelEntry {
            key: node.key(),
            height: node.height(),
            depth,
        })
    }
}

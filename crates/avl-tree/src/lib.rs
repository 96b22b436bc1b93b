//! Arena-backed AVL tree.
//!
//! Keys are unique and kept in a self-balancing binary search tree whose
//! nodes store their subtree height. Every insert and delete recomputes
//! heights on the way back up and applies one of the four rotation cases
//! (Left-Left, Left-Right, Right-Right, Right-Left) wherever a node's balance
//! factor leaves `-1..=1`, so height stays `O(log n)`.
//!
//! Instead of boxed child pointers, nodes live in a [`NodeArena`] and link
//! to their children with `Option<u32>` slot indices. The tree owns the
//! arena, so dropping the tree drops every node.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Node`] and [`KeyNode`] traits |
//! [`arena`] | [`NodeArena`] slot storage with a free list |
//! [`avl`] | [`AvlNode`], recursive rotate/insert/remove, [`AvlTree`] |
//! [`traverse`] | In-order, pre-order and level-order iterators |
//! [`observer`] | [`Observer`] event side channel, [`LogObserver`], [`EventLog`] |
//! [`print`] | Text renderings |
//! [`menu`] | Line-oriented interactive driver used by `avl-menu` |

pub mod arena;
pub mod avl;
pub mod error;
pub mod menu;
pub mod observer;
pub mod print;
pub mod traverse;
pub mod types;

pub use arena::NodeArena;
pub use avl::{AvlNode, AvlNodeLike, AvlTree};
pub use error::InvariantError;
pub use observer::{EventLog, Imbalance, LogObserver, Observer, Rotation, TreeEvent};
pub use traverse::{InOrder, LevelEntry, LevelOrder, PreOrder};
pub use types::{KeyNode, Node};

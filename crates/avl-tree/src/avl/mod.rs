//! AVL tree family: node type, recursive algorithms, and the owning tree.

#[path = "AvlTree.rs"]
pub mod avl_tree;
pub mod types;
pub mod util;

pub use avl_tree::AvlTree;
pub use types::{AvlNode, AvlNodeLike};
pub use util::{
    assert_avl_tree, balance_factor, find, height, insert, max_node, min_node, print, remove,
    rotate_left, rotate_right, update_height,
};

use crate::types::{KeyNode, Node};

/// AVL tree node.
#[derive(Clone, Debug)]
pub struct AvlNode<K> {
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: K,
    /// Height of the subtree rooted here, a leaf has height 1.
    pub h: u32,
}

impl<K> AvlNode<K> {
    pub fn new(k: K) -> Self {
        Self {
            l: None,
            r: None,
            k,
            h: 1,
        }
    }
}

impl<K> Node for AvlNode<K> {
    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

impl<K> KeyNode for AvlNode<K> {
    type Key = K;

    fn key(&self) -> &K {
        &self.k
    }

    fn set_key(&mut self, key: K) {
        self.k = key;
    }
}

/// AVL-specific node behavior.
pub trait AvlNodeLike: KeyNode {
    /// A detached node of height 1.
    fn leaf(key: Self::Key) -> Self
    where
        Self: Sized;
    fn height(&self) -> u32;
    fn set_height(&mut self, h: u32);
}

impl<K> AvlNodeLike for AvlNode<K> {
    fn leaf(key: K) -> Self {
        Self::new(key)
    }

    fn height(&self) -> u32 {
        self.h
    }

    fn set_height(&mut self, h: u32) {
        self.h = h;
    }
}

//! Node trait definitions.
//!
//! Nodes live in a [`NodeArena`](crate::arena::NodeArena) and refer to their
//! children by `Option<u32>` index instead of by pointer. Tree functions take
//! the arena and work with indices, so a rotation is a handful of index
//! swaps and no node is ever shared between two parents.

/// Child links (`l`, `r`).
pub trait Node {
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Keyed node interface used by the search-tree functions.
///
/// The key is mutable in place: a two-child deletion copies the in-order
/// successor's key up into the node being deleted.
pub trait KeyNode: Node {
    type Key;

    fn key(&self) -> &Self::Key;
    fn set_key(&mut self, key: Self::Key);
}

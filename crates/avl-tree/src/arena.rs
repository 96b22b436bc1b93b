//! Slot arena backing the tree nodes.

use std::ops::{Index, IndexMut};

/// `Vec`-backed node storage addressed by `u32` slot index.
///
/// Released slots are kept on a free list and handed out again by
/// [`alloc`](NodeArena::alloc), so insert/delete churn does not grow the
/// backing vector. Releasing a slot drops the node it held.
#[derive(Clone, Debug)]
pub struct NodeArena<N> {
    slots: Vec<Option<N>>,
    free: Vec<u32>,
    len: usize,
}

impl<N> NodeArena<N> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }

    /// Stores `node` and returns its slot index.
    pub fn alloc(&mut self, node: N) -> u32 {
        self.len += 1;
        match self.free.pop() {
            Some(idx) => {
                self.slots[idx as usize] = Some(node);
                idx
            }
            None => {
                self.slots.push(Some(node));
                (self.slots.len() - 1) as u32
            }
        }
    }

    /// Removes the node at `idx` and returns it.
    ///
    /// # Panics
    ///
    /// If the slot is already vacant.
    pub fn release(&mut self, idx: u32) -> N {
        let node = self.slots[idx as usize]
            .take()
            .expect("released slot is occupied");
        self.free.push(idx);
        self.len -= 1;
        node
    }

    pub fn get(&self, idx: u32) -> Option<&N> {
        self.slots.get(idx as usize).and_then(Option::as_ref)
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots ever allocated, live or free.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.len = 0;
    }
}

impl<N> Default for NodeArena<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Index<u32> for NodeArena<N> {
    type Output = N;

    fn index(&self, idx: u32) -> &N {
        self.slots[idx as usize]
            .as_ref()
            .expect("live node index")
    }
}

impl<N> IndexMut<u32> for NodeArena<N> {
    fn index_mut(&mut self, idx: u32) -> &mut N {
        self.slots[idx as usize]
            .as_mut()
            .expect("live node index")
    }
}

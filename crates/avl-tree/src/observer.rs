//! Structural event side channel.
//!
//! The tree reports what it does (node created, rotation performed, node
//! deleted, duplicate rejected, search outcome) to an [`Observer`] it owns.
//! Every method defaults to a no-op and the tree never reads anything back,
//! so swapping observers cannot change the tree's shape or contents.

use std::fmt::{self, Debug};

use log::{debug, info, trace};

/// Direction of a single rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rotation {
    Left,
    Right,
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rotation::Left => f.write_str("left"),
            Rotation::Right => f.write_str("right"),
        }
    }
}

/// The four AVL imbalance shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Imbalance {
    LeftLeft,
    LeftRight,
    RightRight,
    RightLeft,
}

impl Imbalance {
    /// Rotations that fix this shape, in application order.
    pub fn rotations(self) -> &'static [Rotation] {
        match self {
            Imbalance::LeftLeft => &[Rotation::Right],
            Imbalance::LeftRight => &[Rotation::Left, Rotation::Right],
            Imbalance::RightRight => &[Rotation::Left],
            Imbalance::RightLeft => &[Rotation::Right, Rotation::Left],
        }
    }
}

impl fmt::Display for Imbalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Imbalance::LeftLeft => f.write_str("Left-Left"),
            Imbalance::LeftRight => f.write_str("Left-Right"),
            Imbalance::RightRight => f.write_str("Right-Right"),
            Imbalance::RightLeft => f.write_str("Right-Left"),
        }
    }
}

/// Receiver of structural events.
pub trait Observer<K> {
    /// A node holding `key` was created.
    fn on_insert(&mut self, _key: &K) {}

    /// `key` was already present; nothing changed.
    fn on_duplicate(&mut self, _key: &K) {}

    /// Node `at` is out of balance and is about to be fixed.
    fn on_imbalance(&mut self, _case: Imbalance, _at: &K, _after_delete: bool) {}

    /// A rotation was performed around `pivot`, the subtree's former root.
    fn on_rotate(&mut self, _direction: Rotation, _pivot: &K) {}

    /// The node holding `key` was unlinked and dropped.
    fn on_delete(&mut self, _key: &K) {}

    /// A two-child node holding `replaced` takes over `successor`'s key.
    fn on_successor(&mut self, _replaced: &K, _successor: &K) {}

    fn on_search_hit(&mut self, _key: &K) {}

    fn on_search_miss(&mut self, _key: &K) {}
}

/// The no-op observer.
impl<K> Observer<K> for () {}

impl<K, O: Observer<K> + ?Sized> Observer<K> for &mut O {
    fn on_insert(&mut self, key: &K) {
        (**self).on_insert(key)
    }

    fn on_duplicate(&mut self, key: &K) {
        (**self).on_duplicate(key)
    }

    fn on_imbalance(&mut self, case: Imbalance, at: &K, after_delete: bool) {
        (**self).on_imbalance(case, at, after_delete)
    }

    fn on_rotate(&mut self, direction: Rotation, pivot: &K) {
        (**self).on_rotate(direction, pivot)
    }

    fn on_delete(&mut self, key: &K) {
        (**self).on_delete(key)
    }

    fn on_successor(&mut self, replaced: &K, successor: &K) {
        (**self).on_successor(replaced, successor)
    }

    fn on_search_hit(&mut self, key: &K) {
        (**self).on_search_hit(key)
    }

    fn on_search_miss(&mut self, key: &K) {
        (**self).on_search_miss(key)
    }
}

/// Forwards every event to the [`log`] facade.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogObserver;

impl<K: Debug> Observer<K> for LogObserver {
    fn on_insert(&mut self, key: &K) {
        debug!("Created new node with key {key:?}");
    }

    fn on_duplicate(&mut self, key: &K) {
        debug!("Duplicate key {key:?} ignored");
    }

    fn on_imbalance(&mut self, case: Imbalance, at: &K, after_delete: bool) {
        if after_delete {
            info!("{case} imbalance detected at node {at:?} after deletion");
        } else {
            info!("{case} imbalance detected at node {at:?}");
        }
    }

    fn on_rotate(&mut self, direction: Rotation, pivot: &K) {
        info!("Performed {direction} rotation on node {pivot:?}");
    }

    fn on_delete(&mut self, key: &K) {
        debug!("Deleted node {key:?}");
    }

    fn on_successor(&mut self, replaced: &K, successor: &K) {
        debug!("Replacing node {replaced:?} with successor {successor:?}");
    }

    fn on_search_hit(&mut self, key: &K) {
        trace!("Found node with key {key:?}");
    }

    fn on_search_miss(&mut self, key: &K) {
        trace!("Key {key:?} not found");
    }
}

/// A recorded structural event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TreeEvent<K> {
    Created(K),
    Duplicate(K),
    Imbalance {
        case: Imbalance,
        at: K,
        after_delete: bool,
    },
    Rotated {
        direction: Rotation,
        pivot: K,
    },
    Deleted(K),
    Successor {
        replaced: K,
        successor: K,
    },
    Found(K),
    Missed(K),
}

/// Observer that records events in order.
#[derive(Clone, Debug)]
pub struct EventLog<K> {
    events: Vec<TreeEvent<K>>,
}

impl<K> EventLog<K> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn events(&self) -> &[TreeEvent<K>] {
        &self.events
    }

    /// Drains the recorded events.
    pub fn take(&mut self) -> Vec<TreeEvent<K>> {
        std::mem::take(&mut self.events)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Rotations recorded so far, as `(direction, pivot)` pairs.
    pub fn rotations(&self) -> impl Iterator<Item = (Rotation, &K)> + '_ {
        self.events.iter().filter_map(|e| match e {
            TreeEvent::Rotated { direction, pivot } => Some((*direction, pivot)),
            _ => None,
        })
    }
}

impl<K> Default for EventLog<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone> Observer<K> for EventLog<K> {
    fn on_insert(&mut self, key: &K) {
        self.events.push(TreeEvent::Created(key.clone()));
    }

    fn on_duplicate(&mut self, key: &K) {
        self.events.push(TreeEvent::Duplicate(key.clone()));
    }

    fn on_imbalance(&mut self, case: Imbalance, at: &K, after_delete: bool) {
        self.events.push(TreeEvent::Imbalance {
            case,
            at: at.clone(),
            after_delete,
        });
    }

    fn on_rotate(&mut self, direction: Rotation, pivot: &K) {
        self.events.push(TreeEvent::Rotated {
            direction,
            pivot: pivot.clone(),
        });
    }

    fn on_delete(&mut self, key: &K) {
        self.events.push(TreeEvent::Deleted(key.clone()));
    }

    fn on_successor(&mut self, replaced: &K, successor: &K) {
        self.events.push(TreeEvent::Successor {
            replaced: replaced.clone(),
            successor: successor.clone(),
        });
    }

    fn on_search_hit(&mut self, key: &K) {
        self.events.push(TreeEvent::Found(key.clone()));
    }

    fn on_search_miss(&mut self, key: &K) {
        self.events.push(TreeEvent::Missed(key.clone()));
    }
}

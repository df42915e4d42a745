//! Hollows: treasure caches sitting on maze cells.
//!
//! An exclusive hollow owns its own tree-backed store. Shared hollows all
//! point at one heap-backed store for the whole maze, so a treasure taken
//! through any of them is gone from all of them.

use std::cell::RefCell;
use std::rc::Rc;

use crate::store::{Extraction, HeapTreasureStore, OrderedTreasureStore, TreasureStore};
use crate::treasure::Treasure;

/// The one heap every shared hollow in a maze refers to.
pub type SharedHeap = Rc<RefCell<HeapTreasureStore>>;

/// Build the heap that shared hollows will alias.
pub fn shared_heap(treasures: Vec<Treasure>) -> SharedHeap {
    return Rc::new(RefCell::new(HeapTreasureStore::new(treasures)));
}

#[derive(Debug)]
pub enum Hollow {
    /// Sole owner of its treasures.
    Exclusive(OrderedTreasureStore),
    /// One handle onto the maze-wide shared heap.
    Shared(SharedHeap),
}

impl Hollow {
    pub fn exclusive(treasures: Vec<Treasure>) -> Hollow {
        return Hollow::Exclusive(OrderedTreasureStore::new(treasures));
    }

    /// A new handle onto `heap`. The heap itself is not copied.
    pub fn shared(heap: &SharedHeap) -> Hollow {
        return Hollow::Shared(Rc::clone(heap));
    }

    pub fn is_shared(&self) -> bool {
        return matches!(self, Hollow::Shared(_));
    }

    /// Whether both hollows draw from the same shared heap.
    pub fn shares_with(&self, other: &Hollow) -> bool {
        return match (self, other) {
            (Hollow::Shared(a), Hollow::Shared(b)) => Rc::ptr_eq(a, b),
            _ => false,
        };
    }
}

impl TreasureStore for Hollow {
    fn len(&self) -> usize {
        return match self {
            Hollow::Exclusive(store) => store.len(),
            Hollow::Shared(heap) => heap.borrow().len(),
        };
    }

    fn is_empty(&self) -> bool {
        return match self {
            Hollow::Exclusive(store) => store.is_empty(),
            Hollow::Shared(heap) => heap.borrow().is_empty(),
        };
    }

    fn constrained_max_extract(&mut self, capacity: u32) -> Extraction {
        return match self {
            Hollow::Exclusive(store) => store.constrained_max_extract(capacity),
            Hollow::Shared(heap) => heap.borrow_mut().constrained_max_extract(capacity),
        };
    }
}

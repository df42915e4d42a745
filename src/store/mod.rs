//! Treasure stores.
//!
//! Two structurally different stores answer the same question: "remove and
//! return the best treasure that still fits". Both rank by
//! [`Rank`](crate::treasure::Rank), so for the same input list and the same
//! sequence of capacities they hand out the same treasures in the same order.
//!
//! | Store | Backing | Fast path | Fallback |
//! |-------|---------|-----------|----------|
//! | `OrderedTreasureStore` | balanced search tree | O(height) | O(n) scan |
//! | `HeapTreasureStore` | `BinaryHeap` | O(log n) | O(n log n) pop/reinsert |

pub mod balanced_tree;
pub mod heap;
pub mod ordered;

pub use heap::HeapTreasureStore;
pub use ordered::OrderedTreasureStore;

use crate::treasure::Treasure;

/// Outcome of a constrained-max extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// The best treasure whose weight fits; it is gone from the store.
    Taken(Treasure),
    /// The store held nothing.
    Empty,
    /// Every treasure in the store is heavier than the capacity.
    NoneFeasible,
}

impl Extraction {
    /// The extracted treasure, if there was one.
    pub fn taken(self) -> Option<Treasure> {
        return match self {
            Extraction::Taken(treasure) => Some(treasure),
            Extraction::Empty | Extraction::NoneFeasible => None,
        };
    }

    pub fn is_taken(&self) -> bool {
        return matches!(self, Extraction::Taken(_));
    }
}

/// The capability set the harvester relies on.
///
/// Anything that can answer these is a drop-in backing for a hollow.
pub trait TreasureStore {
    /// Number of treasures currently held.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        return self.len() == 0;
    }

    /// Remove and return the highest ranked treasure weighing at most
    /// `capacity`. On any outcome other than [`Extraction::Taken`] the store
    /// is left exactly as it was.
    fn constrained_max_extract(&mut self, capacity: u32) -> Extraction;
}

//! Treasure store backed by a max-heap.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::trace;

use super::{Extraction, TreasureStore};
use crate::treasure::{Rank, Treasure, ranked};

/// A heap slot: the treasure plus the rank it is ordered by.
#[derive(Clone, Debug)]
struct Entry {
    rank: Rank,
    treasure: Treasure,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        return self.rank.cmp(&other.rank);
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        return Some(self.cmp(other));
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        return self.rank == other.rank;
    }
}

impl Eq for Entry {}

/// Treasures in a [`BinaryHeap`] keyed by [`Rank`].
///
/// Extraction pops until something fits, then pushes every rejected
/// treasure back. Whatever the outcome, the heap afterwards holds exactly
/// what it held before minus the one treasure returned.
#[derive(Debug)]
pub struct HeapTreasureStore {
    heap: BinaryHeap<Entry>,
}

impl HeapTreasureStore {
    /// Heapify in O(n). Ties in ratio are broken by position in
    /// `treasures`, earlier first.
    pub fn new(treasures: Vec<Treasure>) -> HeapTreasureStore {
        let entries: Vec<Entry> = ranked(treasures)
            .map(|(rank, treasure)| Entry { rank, treasure })
            .collect();
        return HeapTreasureStore {
            heap: BinaryHeap::from(entries),
        };
    }

    /// Remaining treasures in heap storage order.
    pub fn iter(&self) -> impl Iterator<Item = &Treasure> {
        return self.heap.iter().map(|entry| &entry.treasure);
    }

    /// The best remaining treasure, regardless of weight.
    pub fn peek(&self) -> Option<&Treasure> {
        return self.heap.peek().map(|entry| &entry.treasure);
    }
}

impl TreasureStore for HeapTreasureStore {
    fn len(&self) -> usize {
        return self.heap.len();
    }

    /// O(log n) when the best treasure fits, O(n log n) when every pop is
    /// rejected.
    fn constrained_max_extract(&mut self, capacity: u32) -> Extraction {
        if self.heap.is_empty() {
            return Extraction::Empty;
        }

        let mut rejected: Vec<Entry> = Vec::new();
        let mut chosen = None;
        while let Some(entry) = self.heap.pop() {
            if entry.treasure.weight() <= capacity {
                chosen = Some(entry.treasure);
                break;
            }
            rejected.push(entry);
        }

        if !rejected.is_empty() {
            trace!(
                capacity,
                rejected = rejected.len(),
                "heap store: reinserting rejected treasures"
            );
        }
        self.heap.extend(rejected);

        return match chosen {
            Some(treasure) => Extraction::Taken(treasure),
            None => Extraction::NoneFeasible,
        };
    }
}

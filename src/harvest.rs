//! Greedy treasure collection along a path.
//!
//! Each hollow on the path gets whatever capacity the hollows before it left
//! over, and hands back its best treasure that fits. Nothing is reconsidered
//! later, so the haul is greedy per cell, not an optimal knapsack.

use tracing::debug;

use crate::maze::{Maze, Position};
use crate::store::TreasureStore;
use crate::treasure::Treasure;

/// Remaining capacity plus everything collected so far.
#[derive(Debug, Clone)]
pub struct Backpack {
    remaining: u32,
    collected: Vec<Treasure>,
}

impl Backpack {
    pub fn new(capacity: u32) -> Backpack {
        return Backpack {
            remaining: capacity,
            collected: Vec::new(),
        };
    }

    pub fn remaining(&self) -> u32 {
        return self.remaining;
    }

    pub fn collected(&self) -> &[Treasure] {
        return &self.collected;
    }

    /// Take the best treasure from `store` that fits in the remaining
    /// capacity, if any.
    pub fn visit<S: TreasureStore + ?Sized>(&mut self, store: &mut S) -> Option<&Treasure> {
        let treasure = store.constrained_max_extract(self.remaining).taken()?;
        self.remaining -= treasure.weight();
        self.collected.push(treasure);
        return self.collected.last();
    }

    /// Everything collected, or `None` if the backpack is still empty.
    pub fn finish(self) -> Option<Vec<Treasure>> {
        if self.collected.is_empty() {
            return None;
        }
        return Some(self.collected);
    }
}

/// Visit `stores` in order with one backpack.
pub fn harvest<'a, S, It>(stores: It, capacity: u32) -> Option<Vec<Treasure>>
where
    S: TreasureStore + ?Sized + 'a,
    It: IntoIterator<Item = &'a mut S>,
{
    let mut backpack = Backpack::new(capacity);
    for store in stores {
        backpack.visit(store);
    }
    return backpack.finish();
}

impl Maze {
    /// Walk `path` in order, taking from every hollow on it.
    ///
    /// # Panics
    ///
    /// If a position on `path` lies outside the grid.
    pub fn take_treasures(&mut self, path: &[Position], capacity: u32) -> Option<Vec<Treasure>> {
        let mut backpack = Backpack::new(capacity);
        for position in path {
            let Some(cell) = self.cell_mut(*position) else {
                panic!("path leaves the grid at {}", position);
            };
            let Some(hollow) = cell.tile.hollow_mut() else {
                continue;
            };
            if let Some(treasure) = backpack.visit(hollow) {
                let (weight, value) = (treasure.weight(), treasure.value());
                debug!(%position, weight, value, remaining = backpack.remaining(), "took treasure");
            }
        }
        return backpack.finish();
    }
}

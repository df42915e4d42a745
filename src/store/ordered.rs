//! Treasure store backed by a bulk-built search tree.

use tracing::trace;

use super::balanced_tree::BalancedTree;
use super::{Extraction, TreasureStore};
use crate::treasure::{Rank, Treasure, ranked};

/// Treasures keyed by [`Rank`] in a [`BalancedTree`].
///
/// The fast path is a single probe at the rightmost node. When the best
/// treasure is too heavy, the store falls back to a full descending scan.
/// The tree is never rebalanced, which is fine here: extraction only removes.
#[derive(Debug)]
pub struct OrderedTreasureStore {
    tree: BalancedTree<Rank, Treasure>,
}

impl OrderedTreasureStore {
    /// Build the store in O(n log n). Ties in ratio are broken by position
    /// in `treasures`, earlier first.
    pub fn new(treasures: Vec<Treasure>) -> OrderedTreasureStore {
        return OrderedTreasureStore {
            tree: BalancedTree::build(ranked(treasures).collect()),
        };
    }

    /// Remaining treasures, worst ranked first.
    pub fn iter(&self) -> impl Iterator<Item = &Treasure> {
        return self.tree.iter().map(|(_, treasure)| treasure);
    }

    pub fn height(&self) -> usize {
        return self.tree.height();
    }
}

impl TreasureStore for OrderedTreasureStore {
    fn len(&self) -> usize {
        return self.tree.len();
    }

    fn is_empty(&self) -> bool {
        return self.tree.is_empty();
    }

    /// O(height) when the best treasure fits, O(n) otherwise.
    fn constrained_max_extract(&mut self, capacity: u32) -> Extraction {
        let Some((best, treasure)) = self.tree.max() else {
            return Extraction::Empty;
        };
        if treasure.weight() <= capacity {
            let best = *best;
            return Extraction::Taken(self.tree.remove(&best));
        }

        trace!(capacity, len = self.tree.len(), "ordered store: best too heavy, scanning");
        let feasible = self
            .tree
            .descending()
            .find(|(_, treasure)| treasure.weight() <= capacity)
            .map(|(rank, _)| *rank);
        return match feasible {
            Some(rank) => Extraction::Taken(self.tree.remove(&rank)),
            None => Extraction::NoneFeasible,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(name: &str, weight: u32, value: u32) -> Treasure {
        return Treasure::new(name, weight, value).unwrap();
    }

    fn names(store: &OrderedTreasureStore) -> Vec<String> {
        return store.iter().map(|t| t.name().to_string()).collect();
    }

    #[test]
    fn empty_store_reports_empty() {
        let mut store = OrderedTreasureStore::new(vec![]);
        assert!(store.is_empty());
        assert_eq!(store.constrained_max_extract(100), Extraction::Empty);
    }

    #[test]
    fn takes_best_ratio_when_it_fits() {
        let mut store =
            OrderedTreasureStore::new(vec![t("cup", 5, 5), t("gem", 2, 10), t("coin", 1, 3)]);
        assert_eq!(store.constrained_max_extract(10), Extraction::Taken(t("gem", 2, 10)));
        assert_eq!(store.len(), 2);
        assert_eq!(names(&store), vec!["cup", "coin"]);
    }

    #[test]
    fn falls_back_to_best_that_fits() {
        let mut store =
            OrderedTreasureStore::new(vec![t("crown", 10, 100), t("ring", 3, 12), t("cup", 2, 2)]);
        assert_eq!(store.constrained_max_extract(3), Extraction::Taken(t("ring", 3, 12)));
        assert_eq!(names(&store), vec!["cup", "crown"]);
    }

    #[test]
    fn nothing_fits_leaves_store_unchanged() {
        let mut store = OrderedTreasureStore::new(vec![t("anvil", 50, 5), t("statue", 20, 40)]);
        let before = names(&store);
        assert_eq!(store.constrained_max_extract(10), Extraction::NoneFeasible);
        assert_eq!(names(&store), before);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn equal_ratios_come_out_in_list_order() {
        let mut store = OrderedTreasureStore::new(vec![t("a", 1, 2), t("b", 2, 4), t("c", 3, 6)]);
        let order: Vec<String> = (0..3)
            .filter_map(|_| store.constrained_max_extract(10).taken())
            .map(|t| t.name().to_string())
            .collect();
        assert_eq!(order, vec!["a", "b", "c"]);
    }

    #[test]
    fn equal_ratio_fallback_skips_heavy_duplicate() {
        let mut store = OrderedTreasureStore::new(vec![t("heavy", 4, 8), t("light", 1, 2)]);
        assert_eq!(store.constrained_max_extract(2), Extraction::Taken(t("light", 1, 2)));
        assert_eq!(names(&store), vec!["heavy"]);
    }

    #[test]
    fn height_is_balanced_after_build() {
        let store = OrderedTreasureStore::new((1..=15).map(|w| t("x", w, w * 2)).collect());
        assert_eq!(store.height(), 4);
    }
}

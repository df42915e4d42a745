//! Conformance suite for treasure stores.
//!
//! Every `TreasureStore` backing must pass these. Each test takes a
//! constructor so the same checks run against both stores and both kinds of
//! hollow.
//!
//! To cover a new backing, add it to the `conformance!` invocations at the
//! bottom of this file.

use hollows::hollow::{Hollow, shared_heap};
use hollows::store::{HeapTreasureStore, OrderedTreasureStore};
use hollows::{Extraction, Treasure, TreasureStore};

// =============================================================================
// Helpers
// =============================================================================

fn t(name: &str, weight: u32, value: u32) -> Treasure {
    return Treasure::new(name, weight, value).unwrap();
}

fn drain<S: TreasureStore>(store: &mut S, capacity: u32) -> Vec<String> {
    let mut names = Vec::new();
    while let Some(treasure) = store.constrained_max_extract(capacity).taken() {
        names.push(treasure.name().to_string());
    }
    return names;
}

// =============================================================================
// Checks
// =============================================================================

pub fn empty_store_is_empty<S: TreasureStore>(make: impl Fn(Vec<Treasure>) -> S) {
    let mut store = make(vec![]);
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
    assert_eq!(store.constrained_max_extract(0), Extraction::Empty);
    assert_eq!(store.constrained_max_extract(u32::MAX), Extraction::Empty);
}

pub fn drains_in_ratio_order<S: TreasureStore>(make: impl Fn(Vec<Treasure>) -> S) {
    let mut store = make(vec![
        t("copper", 4, 4),
        t("diamond", 1, 50),
        t("silver", 2, 6),
        t("gold", 3, 30),
        t("lead", 10, 1),
    ]);
    assert_eq!(store.len(), 5);
    assert_eq!(drain(&mut store, 100), vec!["diamond", "gold", "silver", "copper", "lead"]);
    assert!(store.is_empty());
}

pub fn picks_best_that_fits<S: TreasureStore>(make: impl Fn(Vec<Treasure>) -> S) {
    let mut store = make(vec![
        t("crown", 10, 100),
        t("ring", 3, 12),
        t("cup", 2, 2),
        t("pin", 1, 3),
    ]);
    assert_eq!(store.constrained_max_extract(3), Extraction::Taken(t("ring", 3, 12)));
    assert_eq!(store.constrained_max_extract(2), Extraction::Taken(t("pin", 1, 3)));
    assert_eq!(store.constrained_max_extract(2), Extraction::Taken(t("cup", 2, 2)));
    assert_eq!(store.constrained_max_extract(2), Extraction::NoneFeasible);
    assert_eq!(store.len(), 1);
    assert_eq!(store.constrained_max_extract(10), Extraction::Taken(t("crown", 10, 100)));
}

pub fn infeasible_call_changes_nothing<S: TreasureStore>(make: impl Fn(Vec<Treasure>) -> S) {
    let mut store = make(vec![t("anvil", 50, 5), t("statue", 20, 40), t("bell", 12, 1)]);
    assert_eq!(store.constrained_max_extract(11), Extraction::NoneFeasible);
    assert_eq!(store.len(), 3);
    assert_eq!(drain(&mut store, 50), vec!["statue", "anvil", "bell"]);
}

pub fn zero_capacity_fits_nothing<S: TreasureStore>(make: impl Fn(Vec<Treasure>) -> S) {
    let mut store = make(vec![t("pebble", 1, 0)]);
    assert_eq!(store.constrained_max_extract(0), Extraction::NoneFeasible);
    assert_eq!(store.constrained_max_extract(1), Extraction::Taken(t("pebble", 1, 0)));
}

pub fn ties_go_to_the_earlier_treasure<S: TreasureStore>(make: impl Fn(Vec<Treasure>) -> S) {
    let mut store = make(vec![
        t("first", 2, 4),
        t("second", 1, 2),
        t("third", 3, 6),
        t("fourth", 5, 10),
    ]);
    assert_eq!(drain(&mut store, 100), vec!["first", "second", "third", "fourth"]);

    // A heavy tie is skipped without losing its place.
    let mut store = make(vec![t("heavy", 4, 8), t("light", 1, 2)]);
    assert_eq!(store.constrained_max_extract(3), Extraction::Taken(t("light", 1, 2)));
    assert_eq!(store.constrained_max_extract(3), Extraction::NoneFeasible);
    assert_eq!(store.constrained_max_extract(4), Extraction::Taken(t("heavy", 4, 8)));
}

pub fn zero_value_treasures_are_still_taken<S: TreasureStore>(make: impl Fn(Vec<Treasure>) -> S) {
    let mut store = make(vec![t("rock", 3, 0), t("sand", 1, 0)]);
    assert_eq!(drain(&mut store, 10), vec!["rock", "sand"]);
}

macro_rules! conformance {
    ($module:ident, $make:expr) => {
        mod $module {
            use super::*;

            #[test]
            fn empty_store_is_empty() {
                super::empty_store_is_empty($make);
            }

            #[test]
            fn drains_in_ratio_order() {
                super::drains_in_ratio_order($make);
            }

            #[test]
            fn picks_best_that_fits() {
                super::picks_best_that_fits($make);
            }

            #[test]
            fn infeasible_call_changes_nothing() {
                super::infeasible_call_changes_nothing($make);
            }

            #[test]
            fn zero_capacity_fits_nothing() {
                super::zero_capacity_fits_nothing($make);
            }

            #[test]
            fn ties_go_to_the_earlier_treasure() {
                super::ties_go_to_the_earlier_treasure($make);
            }

            #[test]
            fn zero_value_treasures_are_still_taken() {
                super::zero_value_treasures_are_still_taken($make);
            }
        }
    };
}

conformance!(ordered_store, OrderedTreasureStore::new);
conformance!(heap_store, HeapTreasureStore::new);
conformance!(exclusive_hollow, Hollow::exclusive);
conformance!(shared_hollow, |treasures| Hollow::shared(&shared_heap(treasures)));

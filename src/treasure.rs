//! Treasures and the keys they are ranked by.
//!
//! A treasure is immutable once generated. Stores never look at a treasure's
//! name; they rank by [`Rank`], which pairs the value/weight [`Ratio`] with the
//! treasure's ordinal in the list the store was built from.

use std::cmp::Ordering;
use std::fmt;

use thiserror::Error;

/// Error returned when a treasure cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreasureError {
    /// Every treasure must weigh something, otherwise its ratio is undefined.
    #[error("treasure {name:?} has zero weight")]
    ZeroWeight { name: String },
}

/// A named treasure with a positive weight and a non-negative value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Treasure {
    name: String,
    weight: u32,
    value: u32,
}

impl Treasure {
    /// Create a treasure, rejecting a zero weight.
    pub fn new(
        name: impl Into<String>,
        weight: u32,
        value: u32,
    ) -> Result<Treasure, TreasureError> {
        let name = name.into();
        if weight == 0 {
            return Err(TreasureError::ZeroWeight { name });
        }
        return Ok(Treasure { name, weight, value });
    }

    pub fn name(&self) -> &str {
        return &self.name;
    }

    pub fn weight(&self) -> u32 {
        return self.weight;
    }

    pub fn value(&self) -> u32 {
        return self.value;
    }

    /// The value/weight ratio, the sole measure of how good a treasure is.
    pub fn ratio(&self) -> Ratio {
        return Ratio {
            value: self.value,
            weight: self.weight,
        };
    }
}

impl fmt::Display for Treasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(
            f,
            "{} (weight {}, value {}, ratio {:.3})",
            self.name,
            self.weight,
            self.value,
            self.ratio().as_f64()
        );
    }
}

/// An exact value/weight ratio.
///
/// Compared by cross-multiplication in `u64`, so `2/4 == 1/2` and no
/// floating point rounding ever decides which treasure is better.
#[derive(Debug, Clone, Copy)]
pub struct Ratio {
    value: u32,
    weight: u32,
}

impl Ratio {
    pub fn as_f64(&self) -> f64 {
        return self.value as f64 / self.weight as f64;
    }
}

impl Ord for Ratio {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = self.value as u64 * other.weight as u64;
        let rhs = other.value as u64 * self.weight as u64;
        return lhs.cmp(&rhs);
    }
}

impl PartialOrd for Ratio {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        return Some(self.cmp(other));
    }
}

impl PartialEq for Ratio {
    fn eq(&self, other: &Self) -> bool {
        return self.cmp(other) == Ordering::Equal;
    }
}

impl Eq for Ratio {}

/// The key both treasure stores rank by.
///
/// Higher ratio ranks higher. Among equal ratios the treasure that came
/// earlier in the supplied list (lower ordinal) ranks higher, so two stores
/// built from the same list always agree on which treasure is best.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rank {
    pub ratio: Ratio,
    pub ordinal: u32,
}

impl Rank {
    pub fn new(treasure: &Treasure, ordinal: u32) -> Rank {
        return Rank {
            ratio: treasure.ratio(),
            ordinal,
        };
    }
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> Ordering {
        return self
            .ratio
            .cmp(&other.ratio)
            .then_with(|| other.ordinal.cmp(&self.ordinal));
    }
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        return Some(self.cmp(other));
    }
}

/// Pair every treasure with its rank, using list position as the ordinal.
pub(crate) fn ranked(treasures: Vec<Treasure>) -> impl Iterator<Item = (Rank, Treasure)> {
    return treasures.into_iter().enumerate().map(|(i, treasure)| {
        let ordinal = u32::try_from(i).expect("more than u32::MAX treasures");
        (Rank::new(&treasure, ordinal), treasure)
    });
}

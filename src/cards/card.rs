//! Card values and rank comparison.
//!
//! A card is just its integer encoding. Every four consecutive values share
//! a rank: the rank is the value with its low two bits masked off. Suits are
//! not modeled beyond that grouping.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Mask applied to a card value to obtain its rank.
pub const RANK_MASK: u8 = 0xFC;

/// An encoded card (conventionally `0..52`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Card(pub u8);

impl Card {
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Raw encoded value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Comparable rank (`value & 0xFC`).
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.0 & RANK_MASK
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Order two cards by rank.
///
/// `Greater` means `a` wins, `Less` means `b` wins and `Equal` is a tie,
/// whatever the raw values.
#[must_use]
pub fn compare_cards(a: Card, b: Card) -> Ordering {
    a.rank().cmp(&b.rank())
}

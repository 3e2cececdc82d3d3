//! Deck generation and dealing.
//!
//! The deck is the identity sequence `0..DECK_SIZE` put through a seeded
//! Fisher-Yates shuffle. Dealing splits it at the midpoint: the first half
//! goes to player A, the second half to player B, shuffle order preserved
//! (front of the hand = first card dealt).

use serde::{Deserialize, Serialize};

use super::card::Card;
use crate::core::config::DECK_SIZE;
use crate::core::error::GameError;
use crate::core::rng::GameRng;

/// Number of distinct values a `Card` can encode.
pub const MAX_DECK_SIZE: usize = u8::MAX as usize + 1;

/// A shuffled pool of distinct cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Shuffle a full deck with a fresh generator seeded by `seed`.
    pub fn shuffled(seed: u64) -> Result<Self, GameError> {
        Self::shuffled_with(&mut GameRng::new(seed), DECK_SIZE)
    }

    /// Shuffle `size` cards drawing from an existing generator.
    ///
    /// Fails with `DeckTooLarge` above [`MAX_DECK_SIZE`] cards.
    pub fn shuffled_with(rng: &mut GameRng, size: usize) -> Result<Self, GameError> {
        if size > MAX_DECK_SIZE {
            return Err(GameError::DeckTooLarge {
                size,
                max: MAX_DECK_SIZE,
            });
        }
        let cards = rng
            .permutation(size)?
            .into_iter()
            .map(|v| Card::new(v as u8))
            .collect();
        Ok(Self { cards })
    }

    /// Cards in shuffle order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Split at the midpoint into (player A, player B) halves.
    #[must_use]
    pub fn deal(self) -> (Vec<Card>, Vec<Card>) {
        let mut first = self.cards;
        let second = first.split_off(first.len() / 2);
        (first, second)
    }
}

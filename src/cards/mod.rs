//! Card layer: encoded card values, rank comparison and the deck generator.
//!
//! ## Key Types
//!
//! - `Card`: Integer-encoded card, rank = value & 0xFC
//! - `compare_cards`: Rank ordering of two cards
//! - `Deck`: Seeded shuffled pool, dealt in halves

pub mod card;
pub mod deck;

pub use card::{compare_cards, Card, RANK_MASK};
pub use deck::{Deck, MAX_DECK_SIZE};

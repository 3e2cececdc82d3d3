//! Two-player "War".
//!
//! - Each player starts with half of a shuffled 52-card deck
//! - Every tick compares the two front cards by rank; the higher card
//!   takes both to the back of its owner's hand
//! - Ties start a war (`Standard`) or rotate both front cards (`Simple`)
//! - The game ends when a hand empties, the conflict budget runs out,
//!   or a war cannot be settled

mod game;
pub mod tiebreak;

pub use game::WarGame;
pub use tiebreak::WarOutcome;

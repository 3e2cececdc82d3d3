//! Game state for one simulation run.
//!
//! ## GameState
//!
//! Everything the round engine mutates:
//! - Both players' hands (exclusively owned)
//! - Conflict counter against the configured budget
//! - Per-run statistics
//!
//! The state is created once from a `SimConfig` and passed by `&mut` into
//! every tick. Nothing else holds a reference to the hands between calls.

use serde::{Deserialize, Serialize};

use super::config::{GameMode, SimConfig, HAND_CAPACITY};
use super::error::GameError;
use super::player::{Player, PlayerPair};
use crate::cards::{Card, Deck};
use crate::zones::BoundedQueue;

/// A player's hand: cards are played from the front, won cards go to the back.
pub type Hand = BoundedQueue<Card>;

/// Counters collected while a game runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    /// Ticks that changed the state (terminal ticks are not counted).
    pub ticks: u64,

    /// Ticks decided by a single comparison.
    pub battles: u64,

    /// Wars started (ties in `Standard` mode).
    pub wars: u64,

    /// Comparisons made inside wars.
    pub war_rounds: u64,

    /// Ties resolved by rotating both front cards (`Simple` mode).
    pub cycles: u64,
}

/// Full state of a game in progress.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Configuration the game was created with.
    pub config: SimConfig,

    /// Conflicts consumed so far.
    pub conflicts: u64,

    /// Per-run counters.
    pub stats: RunStats,

    hands: PlayerPair<Hand>,
}

impl GameState {
    /// Shuffle a deck from `config.seed` and deal it in halves.
    pub fn new(config: SimConfig) -> Result<Self, GameError> {
        let (a, b) = Deck::shuffled(config.seed)?.deal();
        Self::from_hands(config, &a, &b)
    }

    /// Start from explicit hands (front of each slice = front of the hand).
    pub fn from_hands(config: SimConfig, a: &[Card], b: &[Card]) -> Result<Self, GameError> {
        Ok(Self {
            config,
            conflicts: 0,
            stats: RunStats::default(),
            hands: PlayerPair::from_values(build_hand(a)?, build_hand(b)?),
        })
    }

    /// A player's hand.
    #[must_use]
    pub fn hand(&self, player: Player) -> &Hand {
        &self.hands[player]
    }

    /// Both hands, for the round engine.
    pub(crate) fn hands_mut(&mut self) -> &mut PlayerPair<Hand> {
        &mut self.hands
    }

    /// Number of cards in a player's hand.
    #[must_use]
    pub fn hand_size(&self, player: Player) -> usize {
        self.hands[player].len()
    }

    /// Cards across both hands.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.hands.iter().map(|(_, hand)| hand.len()).sum()
    }

    /// Cards of a player's hand, front to back.
    #[must_use]
    pub fn cards(&self, player: Player) -> Vec<Card> {
        let hand = &self.hands[player];
        let mut cards = vec![Card::new(0); hand.len()];
        hand.for_each_indexed(|&card, index| cards[index] = card);
        cards
    }

    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.config.mode
    }

    #[must_use]
    pub fn max_conflicts(&self) -> u64 {
        self.config.max_conflicts
    }

    /// True once the conflict budget has been reached.
    #[must_use]
    pub fn budget_exhausted(&self) -> bool {
        self.conflicts >= self.config.max_conflicts
    }
}

fn build_hand(cards: &[Card]) -> Result<Hand, GameError> {
    if cards.len() > HAND_CAPACITY {
        return Err(GameError::Overdealt {
            cards: cards.len(),
            capacity: HAND_CAPACITY,
        });
    }

    let mut hand = Hand::new(HAND_CAPACITY)?;
    for &card in cards {
        hand.push(card)?;
    }
    Ok(hand)
}

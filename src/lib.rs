//! # rust-war
//!
//! Deterministic two-player "War" card game simulator.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: A seed fully determines the deal and therefore the
//!    whole game. Re-running a config reproduces the same report.
//!
//! 2. **Explicit State**: `GameState` is owned by the caller and passed by
//!    `&mut` into every tick. No global state.
//!
//! 3. **Bounded Hands**: Hands are fixed-capacity ring buffers sized to the
//!    deck; a card can never be created or lost.
//!
//! ## Modules
//!
//! - `core`: Players, state, RNG, configuration, errors
//! - `zones`: Bounded circular queue backing each hand
//! - `cards`: Card encoding, rank comparison, deck generation
//! - `rules`: RulesEngine trait, ticks and outcomes
//! - `games`: The War engine and its war sub-protocol
//! - `sim`: Simulation driver, reports and batch tallies
//! - `perm`: Standalone permutation/sort utility

pub mod cards;
pub mod core;
pub mod games;
pub mod perm;
pub mod rules;
pub mod sim;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    seed_from_signed, ConfigError, GameError, GameMode, GameRng, GameState, Player, PlayerPair,
    QueueError, RangeError, RunStats, SimConfig, SimError, WarRules, DECK_SIZE, HAND_CAPACITY,
};

pub use crate::zones::BoundedQueue;

pub use crate::cards::{compare_cards, Card, Deck};

pub use crate::rules::{Outcome, RulesEngine, Tick, TickEvent};

pub use crate::games::war::{WarGame, WarOutcome};

pub use crate::sim::{BatchSummary, Report, Simulator, Summary};

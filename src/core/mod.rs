//! Core engine types: players, state, RNG, configuration, errors.
//!
//! This module contains the building blocks shared by the card layer,
//! the round engine and the simulator.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use config::{seed_from_signed, GameMode, SimConfig, WarRules, DECK_SIZE, HAND_CAPACITY};
pub use error::{ConfigError, GameError, QueueError, RangeError, SimError};
pub use player::{Player, PlayerPair};
pub use rng::{GameRng, RAND_MAX};
pub use state::{GameState, Hand, RunStats};

//! Rules engine trait for game implementations.
//!
//! Engines implement `RulesEngine` to define:
//! - How a tick moves cards between hands
//! - Terminal outcomes
//!
//! The simulator calls into `RulesEngine` but never interprets
//! card comparisons directly.

pub mod engine;

pub use engine::{Outcome, RulesEngine, Tick, TickEvent};

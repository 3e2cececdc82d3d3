//! Error types for the engine.
//!
//! Empty pops and out-of-range peeks are not errors: the queue returns
//! `None` for those and the engine uses them as ordinary signals while
//! probing war depth or detecting an exhausted hand.

use thiserror::Error;

/// Failures of a [`BoundedQueue`](crate::zones::BoundedQueue).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    /// Backing storage for the ring buffer could not be obtained.
    #[error("cannot allocate queue storage for {capacity} slots")]
    Allocation { capacity: usize },

    /// Push into a queue that already holds `capacity` elements.
    #[error("queue is full ({capacity} slots)")]
    Full { capacity: usize },
}

/// Invalid bounds passed to [`GameRng::uniform_draw`](crate::core::GameRng::uniform_draw).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("lower bound {a} is above upper bound {b}")]
    Inverted { a: i64, b: i64 },

    #[error("range [{a}, {b}] is wider than the generator output")]
    SpanTooLarge { a: i64, b: i64 },
}

/// Errors raised while setting up or advancing a game.
///
/// A `Queue(Full)` coming out of a tick means the card total no longer
/// matches the hand capacity: a logic defect, not a recoverable state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("hand invariant violated: {0}")]
    Queue(#[from] QueueError),

    #[error(transparent)]
    Range(#[from] RangeError),

    #[error("hand of {cards} cards exceeds capacity {capacity}")]
    Overdealt { cards: usize, capacity: usize },

    /// More cards requested than distinct card values exist.
    #[error("deck of {size} cards exceeds the {max} encodable values")]
    DeckTooLarge { size: usize, max: usize },
}

/// Malformed `seed mode max_conflicts` input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("missing {0}")]
    Missing(&'static str),

    #[error("invalid {field}: {value:?}")]
    Invalid { field: &'static str, value: String },

    #[error("unknown mode {0}")]
    UnknownMode(i64),
}

/// Errors raised by the [`Simulator`](crate::sim::Simulator) driving loop.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    #[error(transparent)]
    Game(#[from] GameError),

    /// The external iteration cap was reached before a terminal outcome.
    #[error("no terminal outcome after {ticks} ticks")]
    Stalled { ticks: u64 },
}

//! Card containers.
//!
//! A player's hand is a `BoundedQueue<Card>`: cards are played from the
//! front and won cards go to the back.

pub mod queue;

pub use queue::{BoundedQueue, Iter};

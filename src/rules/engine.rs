//! Rules engine trait for the round engine.
//!
//! Engines implement `RulesEngine` to define:
//! - How one tick advances the state
//! - When the game is over
//!
//! The driving loop (`run_to_end`) re-invokes ticks until a terminal
//! outcome is produced or the external iteration cap is reached.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::error::{GameError, SimError};
use crate::core::player::Player;
use crate::core::state::GameState;

/// Terminal outcome of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The conflict budget ran out.
    MaxConflicts,
    /// A war could not be settled because a hand ran out of cards.
    NoResolution,
    /// Player B's hand is empty.
    PlayerAWins,
    /// Player A's hand is empty.
    PlayerBWins,
}

impl Outcome {
    /// All outcomes in code order.
    pub const ALL: [Outcome; 4] = [
        Outcome::MaxConflicts,
        Outcome::NoResolution,
        Outcome::PlayerAWins,
        Outcome::PlayerBWins,
    ];

    /// External outcome code (0..=3).
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Outcome::MaxConflicts => 0,
            Outcome::NoResolution => 1,
            Outcome::PlayerAWins => 2,
            Outcome::PlayerBWins => 3,
        }
    }

    /// The winning player, if the game had one.
    #[must_use]
    pub const fn winner(self) -> Option<Player> {
        match self {
            Outcome::PlayerAWins => Some(Player::A),
            Outcome::PlayerBWins => Some(Player::B),
            Outcome::MaxConflicts | Outcome::NoResolution => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Outcome::MaxConflicts => "max conflicts",
            Outcome::NoResolution => "no resolution",
            Outcome::PlayerAWins => "player A wins",
            Outcome::PlayerBWins => "player B wins",
        };
        f.write_str(name)
    }
}

/// What a non-terminal tick did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TickEvent {
    /// Front cards differed; the winner took both.
    Battle { winner: Player, a: Card, b: Card },

    /// Front cards tied and a war settled it at `depth`.
    /// `taken` lists the loser's cards moved to the winner, in order.
    War {
        winner: Player,
        depth: usize,
        taken: SmallVec<[Card; 8]>,
    },

    /// Front cards tied and each was rotated to the back of its own hand.
    Cycle { a: Card, b: Card },
}

/// Result of one tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tick {
    Continue(TickEvent),
    Finished(Outcome),
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `tick`: Must be deterministic; returns `Finished` instead of mutating
///   once the game is over
/// - `is_terminal`: Return `None` if the game continues
pub trait RulesEngine {
    /// Advance the game by one tick.
    fn tick(&self, state: &mut GameState) -> Result<Tick, GameError>;

    /// Check whether the game is over without advancing it.
    ///
    /// Only covers outcomes visible from the state alone; outcomes raised
    /// from inside a tick (such as an unresolvable war) are reported by `tick`.
    fn is_terminal(&self, state: &GameState) -> Option<Outcome>;

    // === Convenience Methods ===

    /// Tick until a terminal outcome.
    ///
    /// With `tick_limit = Some(n)`, at most `n` state-changing ticks run;
    /// if the game is still going after that, `SimError::Stalled` is returned.
    fn run_to_end(
        &self,
        state: &mut GameState,
        tick_limit: Option<u64>,
    ) -> Result<Outcome, SimError> {
        let mut ticks = 0u64;

        loop {
            if let Some(outcome) = self.is_terminal(state) {
                return Ok(outcome);
            }
            if tick_limit.is_some_and(|limit| ticks >= limit) {
                return Err(SimError::Stalled { ticks });
            }

            match self.tick(state)? {
                Tick::Finished(outcome) => return Ok(outcome),
                Tick::Continue(_) => ticks += 1,
            }
        }
    }
}

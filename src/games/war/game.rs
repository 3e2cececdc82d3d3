//! War round engine.

use std::cmp::Ordering;

use tracing::{debug, trace};

use super::tiebreak::{self, WarOutcome};
use crate::cards::{compare_cards, Card};
use crate::core::{GameError, GameMode, GameState, Player};
use crate::rules::{Outcome, RulesEngine, Tick, TickEvent};

/// The two-player War engine.
///
/// Stateless: mode, budget and war rules are read from the
/// `GameState` configuration on every tick.
#[derive(Clone, Copy, Debug, Default)]
pub struct WarGame;

impl WarGame {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Front cards of both hands, or the outcome that ends the game.
    ///
    /// Checked in order: conflict budget, B empty, A empty.
    fn fronts(state: &GameState) -> Result<(Card, Card), Outcome> {
        if state.budget_exhausted() {
            return Err(Outcome::MaxConflicts);
        }
        match (state.hand(Player::A).front(), state.hand(Player::B).front()) {
            (_, None) => Err(Outcome::PlayerAWins),
            (None, Some(_)) => Err(Outcome::PlayerBWins),
            (Some(&a), Some(&b)) => Ok((a, b)),
        }
    }

    /// Winner takes both front cards: own card first, then the opponent's.
    fn battle(
        state: &mut GameState,
        winner: Player,
        a: Card,
        b: Card,
    ) -> Result<TickEvent, GameError> {
        let (mine, theirs) = state.hands_mut().split_mut(winner);
        mine.rotate(1)?;
        if let Some(card) = theirs.pop() {
            mine.push(card)?;
        }

        state.conflicts += 1;
        state.stats.battles += 1;
        Ok(TickEvent::Battle { winner, a, b })
    }

    /// Each player's front card moves to the back of their own hand.
    fn cycle(state: &mut GameState, a: Card, b: Card) -> Result<TickEvent, GameError> {
        for player in Player::ALL {
            state.hands_mut()[player].rotate(1)?;
        }

        state.stats.cycles += 1;
        Ok(TickEvent::Cycle { a, b })
    }
}

impl RulesEngine for WarGame {
    fn tick(&self, state: &mut GameState) -> Result<Tick, GameError> {
        let (a, b) = match Self::fronts(state) {
            Ok(fronts) => fronts,
            Err(outcome) => {
                debug!(%outcome, conflicts = state.conflicts, "game over");
                return Ok(Tick::Finished(outcome));
            }
        };

        let event = match compare_cards(a, b) {
            Ordering::Greater => Self::battle(state, Player::A, a, b)?,
            Ordering::Less => Self::battle(state, Player::B, a, b)?,
            Ordering::Equal => match state.mode() {
                GameMode::Simple => Self::cycle(state, a, b)?,
                GameMode::Standard => match tiebreak::resolve(state)? {
                    WarOutcome::Won {
                        winner,
                        depth,
                        taken,
                    } => TickEvent::War {
                        winner,
                        depth,
                        taken,
                    },
                    WarOutcome::MaxConflicts => return Ok(Tick::Finished(Outcome::MaxConflicts)),
                    WarOutcome::NoCards => return Ok(Tick::Finished(Outcome::NoResolution)),
                },
            },
        };

        state.stats.ticks += 1;
        trace!(
            tick = state.stats.ticks,
            %a,
            %b,
            conflicts = state.conflicts,
            hand_a = state.hand_size(Player::A),
            hand_b = state.hand_size(Player::B),
            "tick"
        );
        Ok(Tick::Continue(event))
    }

    fn is_terminal(&self, state: &GameState) -> Option<Outcome> {
        Self::fronts(state).err()
    }
}

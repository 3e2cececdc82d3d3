//! War sub-protocol: settles a tie between the two front cards.
//!
//! Both hands are probed at the same depth, starting at
//! `WarRules::start_depth` and stepping by two (one face-down card, one
//! face-up card per round). Each round costs two conflicts. The first
//! depth where the ranks differ decides the war; the winner then collects
//! `depth + 2` cards from the loser's front.

use smallvec::SmallVec;
use tracing::debug;

use crate::cards::{compare_cards, Card};
use crate::core::error::GameError;
use crate::core::player::Player;
use crate::core::state::GameState;
use std::cmp::Ordering;

/// How a war ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WarOutcome {
    /// `winner` took `taken` from the loser after deciding at `depth`.
    Won {
        winner: Player,
        depth: usize,
        taken: SmallVec<[Card; 8]>,
    },
    /// The budget was already exceeded when a round was about to start.
    MaxConflicts,
    /// One hand has no card at the probed depth.
    NoCards,
}

enum Round {
    Tie,
    Decided(Player),
    MaxConflicts,
    NoCards,
}

/// One comparison at `depth`.
///
/// Card availability is checked before the budget. The budget check is
/// strict, so a war may finish a round that pushes conflicts past the
/// budget; the next tick then reports `MaxConflicts`.
fn round(state: &mut GameState, depth: usize) -> Round {
    let (a, b) = match (state.hand(Player::A).peek(depth), state.hand(Player::B).peek(depth)) {
        (Some(&a), Some(&b)) => (a, b),
        _ => return Round::NoCards,
    };

    if state.conflicts > state.max_conflicts() {
        return Round::MaxConflicts;
    }

    state.conflicts += 2;
    state.stats.war_rounds += 1;

    match compare_cards(a, b) {
        Ordering::Equal => Round::Tie,
        Ordering::Greater => Round::Decided(Player::A),
        Ordering::Less => Round::Decided(Player::B),
    }
}

/// Run a war to completion and pay out the pile.
pub fn resolve(state: &mut GameState) -> Result<WarOutcome, GameError> {
    let rules = state.config.war;
    state.stats.wars += 1;

    let mut depth = rules.start_depth;
    let winner = loop {
        match round(state, depth) {
            Round::Tie => depth += 2,
            Round::Decided(winner) => break winner,
            Round::MaxConflicts => {
                debug!(depth, conflicts = state.conflicts, "war stopped by conflict budget");
                return Ok(WarOutcome::MaxConflicts);
            }
            Round::NoCards => {
                debug!(
                    depth,
                    a = state.hand_size(Player::A),
                    b = state.hand_size(Player::B),
                    "war ran out of cards"
                );
                return Ok(WarOutcome::NoCards);
            }
        }
    };

    let amount = depth + 2;
    let (mine, theirs) = state.hands_mut().split_mut(winner);
    if rules.recycle_winner {
        mine.rotate(amount)?;
    }

    let mut taken = SmallVec::new();
    for _ in 0..amount {
        let Some(card) = theirs.pop() else { break };
        mine.push(card)?;
        taken.push(card);
    }

    debug!(
        %winner,
        depth,
        taken = taken.len(),
        loser_left = state.hand_size(winner.opponent()),
        "war settled"
    );
    Ok(WarOutcome::Won { winner, depth, taken })
}

//! Simulation results.
//!
//! A `Report` carries the terminal outcome plus the outcome-specific
//! summary handed to the console layer:
//! - `MaxConflicts` / `NoResolution`: both hand sizes
//! - `PlayerAWins`: total conflicts
//! - `PlayerBWins`: player B's hand, front to back
//!
//! `Display` renders the single-line form `"<code> <data>"`.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{GameState, Player, RunStats};
use crate::rules::Outcome;

/// Outcome-specific summary data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Summary {
    HandSizes { a: usize, b: usize },
    Conflicts(u64),
    Hand(Vec<Card>),
}

impl Summary {
    /// Summary for `outcome` taken from the final state.
    #[must_use]
    pub fn of(outcome: Outcome, state: &GameState) -> Self {
        match outcome {
            Outcome::MaxConflicts | Outcome::NoResolution => Summary::HandSizes {
                a: state.hand_size(Player::A),
                b: state.hand_size(Player::B),
            },
            Outcome::PlayerAWins => Summary::Conflicts(state.conflicts),
            Outcome::PlayerBWins => Summary::Hand(state.cards(Player::B)),
        }
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Summary::HandSizes { a, b } => write!(f, "{a} {b}"),
            Summary::Conflicts(n) => write!(f, "{n}"),
            Summary::Hand(cards) => {
                let mut hand = cards.iter();
                if let Some(first) = hand.next() {
                    write!(f, "{first}")?;
                }
                for card in hand {
                    write!(f, " {card}")?;
                }
                Ok(())
            }
        }
    }
}

/// Result of one simulation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub seed: u64,
    pub outcome: Outcome,
    pub summary: Summary,
    pub conflicts: u64,
    pub stats: RunStats,
}

impl Report {
    #[must_use]
    pub fn new(outcome: Outcome, state: &GameState) -> Self {
        Self {
            seed: state.config.seed,
            outcome,
            summary: Summary::of(outcome, state),
            conflicts: state.conflicts,
            stats: state.stats,
        }
    }

    /// External outcome code (0..=3).
    #[must_use]
    pub fn code(&self) -> u8 {
        self.outcome.code()
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.code(), self.summary)
    }
}

/// Aggregate over many seeds.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Games attempted.
    pub games: u64,

    /// Games per terminal outcome.
    pub outcomes: FxHashMap<Outcome, u64>,

    /// Games cut off by the tick limit.
    pub stalled: u64,

    /// Ticks across all finished games.
    pub total_ticks: u64,

    /// Conflicts across all finished games.
    pub total_conflicts: u64,
}

impl BatchSummary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one finished game in.
    pub fn record(&mut self, report: &Report) {
        self.games += 1;
        *self.outcomes.entry(report.outcome).or_default() += 1;
        self.total_ticks += report.stats.ticks;
        self.total_conflicts += report.conflicts;
    }

    /// Count one game that hit the tick limit.
    pub fn record_stalled(&mut self) {
        self.games += 1;
        self.stalled += 1;
    }

    /// Games that ended with `outcome`.
    #[must_use]
    pub fn count(&self, outcome: Outcome) -> u64 {
        self.outcomes.get(&outcome).copied().unwrap_or(0)
    }

    /// Average ticks per finished game.
    #[must_use]
    pub fn avg_ticks(&self) -> f64 {
        let finished = self.games - self.stalled;
        if finished == 0 {
            0.0
        } else {
            self.total_ticks as f64 / finished as f64
        }
    }
}

impl std::fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "games: {}", self.games)?;
        for outcome in Outcome::ALL {
            writeln!(f, "{:<16}{}", outcome.to_string(), self.count(outcome))?;
        }
        writeln!(f, "{:<16}{}", "stalled", self.stalled)?;
        write!(f, "{:<16}{:.2}", "avg ticks", self.avg_ticks())
    }
}

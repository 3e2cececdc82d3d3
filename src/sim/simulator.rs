//! Driving loop: deal, tick to a terminal outcome, report.

use std::ops::Range;

use tracing::{debug, info};

use super::report::{BatchSummary, Report};
use crate::core::{GameState, Player, SimConfig, SimError};
use crate::games::war::WarGame;
use crate::rules::RulesEngine;

/// Runs complete games with a rules engine.
///
/// ## Example
///
/// ```
/// use rust_war::core::{GameMode, SimConfig};
/// use rust_war::sim::Simulator;
///
/// let config = SimConfig::new(1, GameMode::Standard, 1000);
/// let first = Simulator::new().run(&config).unwrap();
/// let second = Simulator::new().run(&config).unwrap();
/// assert_eq!(first, second);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Simulator<E: RulesEngine = WarGame> {
    engine: E,
}

impl Simulator<WarGame> {
    /// Simulator for the standard War engine.
    #[must_use]
    pub fn new() -> Self {
        Self { engine: WarGame }
    }
}

impl<E: RulesEngine> Simulator<E> {
    /// Simulator for a custom engine.
    pub fn with_engine(engine: E) -> Self {
        Self { engine }
    }

    /// Deal from `config.seed` and play to the end.
    pub fn run(&self, config: &SimConfig) -> Result<Report, SimError> {
        let mut state = GameState::new(config.clone())?;
        self.run_state(&mut state)
    }

    /// Play an already dealt game to the end.
    pub fn run_state(&self, state: &mut GameState) -> Result<Report, SimError> {
        let tick_limit = state.config.tick_limit;
        let outcome = self.engine.run_to_end(state, tick_limit)?;
        let report = Report::new(outcome, state);

        debug!(
            hand_a = %state.hand(Player::A),
            hand_b = %state.hand(Player::B),
            "final hands"
        );
        info!(
            seed = report.seed,
            outcome = %report.outcome,
            winner = ?report.outcome.winner(),
            conflicts = report.conflicts,
            ticks = report.stats.ticks,
            wars = report.stats.wars,
            "simulation finished"
        );
        Ok(report)
    }

    /// Play one game per seed in `seeds` with otherwise identical config.
    ///
    /// Stalled games are counted, not fatal; engine errors abort the batch.
    pub fn run_batch(
        &self,
        seeds: Range<u64>,
        config: &SimConfig,
    ) -> Result<BatchSummary, SimError> {
        let mut batch = BatchSummary::new();

        for seed in seeds {
            match self.run(&config.clone().with_seed(seed)) {
                Ok(report) => batch.record(&report),
                Err(SimError::Stalled { ticks }) => {
                    debug!(seed, ticks, "game stalled");
                    batch.record_stalled();
                }
                Err(err) => return Err(err),
            }
        }

        info!(games = batch.games, stalled = batch.stalled, "batch finished");
        Ok(batch)
    }
}

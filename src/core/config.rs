//! Simulation configuration.
//!
//! The external collaborator supplies a seed, a mode and a conflict
//! budget once, before the first tick:
//! - `GameMode`: how a tie between front cards is handled
//! - `WarRules`: how a war in `Standard` mode probes and pays out
//! - `SimConfig`: combines all configuration
//!
//! The console form of those three values is the whitespace-separated
//! triple `seed mode max_conflicts`; see [`SimConfig::from_console`].

use std::str::{FromStr, SplitWhitespace};

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Number of distinct cards in the deck.
pub const DECK_SIZE: usize = 52;

/// Capacity of each player's hand.
pub const HAND_CAPACITY: usize = DECK_SIZE;

/// Generator seed for a signed console seed.
///
/// Negative seeds keep their two's-complement bit pattern, so `-1` seeds
/// the same deck as `u64::MAX`.
#[must_use]
pub const fn seed_from_signed(seed: i64) -> u64 {
    seed as u64
}

/// Tie handling mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// Ties start a war.
    #[default]
    Standard,
    /// Ties rotate each player's front card to the back of their own hand.
    Simple,
}

impl GameMode {
    /// External integer code (0 = Standard, 1 = Simple).
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            GameMode::Standard => 0,
            GameMode::Simple => 1,
        }
    }
}

impl TryFrom<u8> for GameMode {
    type Error = u8;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(GameMode::Standard),
            1 => Ok(GameMode::Simple),
            other => Err(other),
        }
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameMode::Standard => write!(f, "standard"),
            GameMode::Simple => write!(f, "simple"),
        }
    }
}

/// War payout and probing rules.
///
/// The default probes from depth 0 (the tied front cards themselves count
/// as the first war round) and recycles the winner's own cards before
/// taking the loser's.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarRules {
    /// Depth of the first comparison.
    pub start_depth: usize,

    /// Rotate the winner's `depth + 2` front cards to the back of their
    /// hand before appending the loser's `depth + 2` front cards.
    pub recycle_winner: bool,
}

impl Default for WarRules {
    fn default() -> Self {
        Self {
            start_depth: 0,
            recycle_winner: true,
        }
    }
}

impl WarRules {
    /// Variant that skips the tied pair and pays out only the loser's cards.
    #[must_use]
    pub const fn loser_only() -> Self {
        Self {
            start_depth: 2,
            recycle_winner: false,
        }
    }
}

/// Complete simulation configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Deck shuffle seed.
    pub seed: u64,

    /// Tie handling mode.
    pub mode: GameMode,

    /// Conflict budget. Reaching it ends the game with `MaxConflicts`.
    pub max_conflicts: u64,

    /// War rules (only consulted in `Standard` mode).
    pub war: WarRules,

    /// Driving loop iteration cap (`None` = unlimited).
    /// `Simple` games can cycle forever without consuming conflicts.
    pub tick_limit: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            mode: GameMode::Standard,
            max_conflicts: 1000,
            war: WarRules::default(),
            tick_limit: Some(1_000_000),
        }
    }
}

impl SimConfig {
    /// Create a config with the three externally supplied values.
    #[must_use]
    pub fn new(seed: u64, mode: GameMode, max_conflicts: u64) -> Self {
        Self {
            seed,
            mode,
            max_conflicts,
            ..Self::default()
        }
    }

    /// Parse the console triple `seed mode max_conflicts`.
    ///
    /// The seed is a signed integer (see [`seed_from_signed`]), the mode is
    /// its external code and the budget is unsigned. Anything after the
    /// third field is ignored. War rules and the tick limit keep their
    /// defaults.
    pub fn from_console(input: &str) -> Result<Self, ConfigError> {
        let mut fields = input.split_whitespace();

        let seed: i64 = next_field(&mut fields, "seed")?;
        let code: i64 = next_field(&mut fields, "mode")?;
        let mode = u8::try_from(code)
            .ok()
            .and_then(|code| GameMode::try_from(code).ok())
            .ok_or(ConfigError::UnknownMode(code))?;
        let max_conflicts: u64 = next_field(&mut fields, "max conflicts")?;

        Ok(Self::new(seed_from_signed(seed), mode, max_conflicts))
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_max_conflicts(mut self, max_conflicts: u64) -> Self {
        self.max_conflicts = max_conflicts;
        self
    }

    #[must_use]
    pub fn with_war_rules(mut self, war: WarRules) -> Self {
        self.war = war;
        self
    }

    #[must_use]
    pub fn with_tick_limit(mut self, tick_limit: Option<u64>) -> Self {
        self.tick_limit = tick_limit;
        self
    }
}

fn next_field<T: FromStr>(
    fields: &mut SplitWhitespace<'_>,
    field: &'static str,
) -> Result<T, ConfigError> {
    let raw = fields.next().ok_or(ConfigError::Missing(field))?;
    raw.parse().map_err(|_| ConfigError::Invalid {
        field,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_codes() {
        assert_eq!(GameMode::try_from(0), Ok(GameMode::Standard));
        assert_eq!(GameMode::try_from(1), Ok(GameMode::Simple));
        assert_eq!(GameMode::try_from(2), Err(2));
        assert_eq!(GameMode::Simple.code(), 1);
        assert_eq!(GameMode::Standard.to_string(), "standard");
    }

    #[test]
    fn test_war_rules() {
        let rules = WarRules::default();
        assert_eq!(rules.start_depth, 0);
        assert!(rules.recycle_winner);

        let variant = WarRules::loser_only();
        assert_eq!(variant.start_depth, 2);
        assert!(!variant.recycle_winner);
    }

    #[test]
    fn test_config_builder() {
        let config = SimConfig::new(7, GameMode::Simple, 50)
            .with_war_rules(WarRules::loser_only())
            .with_tick_limit(None);

        assert_eq!(config.seed, 7);
        assert_eq!(config.mode, GameMode::Simple);
        assert_eq!(config.max_conflicts, 50);
        assert_eq!(config.war, WarRules::loser_only());
        assert_eq!(config.tick_limit, None);

        let config = config
            .with_seed(9)
            .with_mode(GameMode::Standard)
            .with_max_conflicts(0);
        assert_eq!(
            (config.seed, config.mode, config.max_conflicts),
            (9, GameMode::Standard, 0)
        );
    }

    #[test]
    fn test_seed_from_signed() {
        assert_eq!(seed_from_signed(0), 0);
        assert_eq!(seed_from_signed(42), 42);
        assert_eq!(seed_from_signed(-1), u64::MAX);
        assert_eq!(seed_from_signed(i64::MIN), 1 << 63);
    }

    #[test]
    fn test_from_console() {
        let config = SimConfig::from_console("1 0 1000\n").unwrap();
        assert_eq!(config, SimConfig::new(1, GameMode::Standard, 1000));

        let config = SimConfig::from_console("  -5\t1\n250 trailing").unwrap();
        assert_eq!(config.seed, seed_from_signed(-5));
        assert_eq!(config.mode, GameMode::Simple);
        assert_eq!(config.max_conflicts, 250);
        assert_eq!(config.war, WarRules::default());
    }

    #[test]
    fn test_from_console_errors() {
        assert_eq!(SimConfig::from_console(""), Err(ConfigError::Missing("seed")));
        assert_eq!(SimConfig::from_console("3 0"), Err(ConfigError::Missing("max conflicts")));
        assert_eq!(SimConfig::from_console("3 2 10"), Err(ConfigError::UnknownMode(2)));
        assert_eq!(SimConfig::from_console("3 -1 10"), Err(ConfigError::UnknownMode(-1)));
        assert_eq!(
            SimConfig::from_console("x 0 10"),
            Err(ConfigError::Invalid {
                field: "seed",
                value: "x".to_string()
            })
        );
        assert_eq!(
            SimConfig::from_console("3 0 -10"),
            Err(ConfigError::Invalid {
                field: "max conflicts",
                value: "-10".to_string()
            })
        );
    }

    #[test]
    fn test_config_serde() {
        let config = SimConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SimConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}

//! Round engine and simulator integration tests.
//!
//! These tests play complete games through the public API and check the
//! card conservation, termination and reproducibility guarantees.

use proptest::prelude::*;
use rust_war::{
    seed_from_signed, Card, GameMode, GameState, Outcome, Player, RulesEngine, SimConfig,
    SimError, Simulator, Summary, Tick, TickEvent, WarGame, WarRules, DECK_SIZE,
};

fn cards(values: &[u8]) -> Vec<Card> {
    values.iter().copied().map(Card::new).collect()
}

// =============================================================================
// End-to-End Scenarios
// =============================================================================

/// Seed 1, standard mode, budget 1000: terminates and reproduces.
#[test]
fn test_seed_one_standard_reproducible() {
    let config = SimConfig::new(1, GameMode::Standard, 1000);
    let sim = Simulator::new();

    let first = sim.run(&config).unwrap();
    let second = sim.run(&config).unwrap();

    assert!(Outcome::ALL.contains(&first.outcome));
    assert!(first.stats.ticks <= 1001);
    assert_eq!(first, second);
    assert_eq!(first.to_string(), second.to_string());
}

/// A negative console seed deals a full deck and plays reproducibly.
#[test]
fn test_negative_console_seed() {
    let config = SimConfig::from_console("-5 0 1000").unwrap();
    assert_eq!(config.seed, u64::MAX - 4);

    let state = GameState::new(config.clone()).unwrap();
    assert_eq!(state.total_cards(), DECK_SIZE);

    let sim = Simulator::new();
    let first = sim.run(&config).unwrap();
    assert_eq!(first, sim.run(&config).unwrap());
    assert_eq!(first.seed, seed_from_signed(-5));
}

/// A zero budget ends the game before any card moves.
#[test]
fn test_zero_budget_ends_immediately() {
    for mode in [GameMode::Standard, GameMode::Simple] {
        let mut state = GameState::new(SimConfig::new(9, mode, 0)).unwrap();
        let before = (state.cards(Player::A), state.cards(Player::B));

        let tick = WarGame::new().tick(&mut state).unwrap();

        assert_eq!(tick, Tick::Finished(Outcome::MaxConflicts));
        assert_eq!((state.cards(Player::A), state.cards(Player::B)), before);
        assert_eq!(state.conflicts, 0);
    }
}

/// Summary data matches the outcome for a spread of seeds.
#[test]
fn test_summary_matches_outcome() {
    let sim = Simulator::new();

    for seed in 0..50 {
        let report = sim.run(&SimConfig::new(seed, GameMode::Standard, 2000)).unwrap();

        match (&report.outcome, &report.summary) {
            (Outcome::MaxConflicts | Outcome::NoResolution, Summary::HandSizes { a, b }) => {
                assert_eq!(a + b, DECK_SIZE);
            }
            (Outcome::PlayerAWins, Summary::Conflicts(n)) => assert_eq!(*n, report.conflicts),
            (Outcome::PlayerBWins, Summary::Hand(hand)) => assert_eq!(hand.len(), DECK_SIZE),
            (outcome, summary) => panic!("summary {summary:?} does not fit {outcome:?}"),
        }
    }
}

/// A scripted game: A wins a battle, then a war, then B runs out.
#[test]
fn test_scripted_game() {
    let config = SimConfig::new(0, GameMode::Standard, 100);
    let a = cards(&[44, 0, 9, 30]);
    let b = cards(&[8, 2, 1, 12]);
    let mut state = GameState::from_hands(config, &a, &b).unwrap();
    let game = WarGame::new();

    // 44 beats 8.
    let tick = game.tick(&mut state).unwrap();
    assert!(matches!(tick, Tick::Continue(TickEvent::Battle { winner: Player::A, .. })));
    assert_eq!(state.cards(Player::A), cards(&[0, 9, 30, 44, 8]));
    assert_eq!(state.cards(Player::B), cards(&[2, 1, 12]));

    // 0 ties 2; depth 2 compares 30 against 12.
    let tick = game.tick(&mut state).unwrap();
    let Tick::Continue(TickEvent::War { winner, depth, taken }) = tick else {
        panic!("expected a war, got {tick:?}");
    };
    assert_eq!((winner, depth), (Player::A, 2));
    assert_eq!(taken.as_slice(), &cards(&[2, 1, 12])[..]);
    assert!(state.hand(Player::B).is_empty());
    assert_eq!(state.total_cards(), 8);

    assert_eq!(game.tick(&mut state).unwrap(), Tick::Finished(Outcome::PlayerAWins));
    assert_eq!(state.conflicts, 5);
}

/// Simple mode never starts a war.
#[test]
fn test_simple_mode_has_no_wars() {
    let config = SimConfig::new(21, GameMode::Simple, 300).with_tick_limit(Some(50_000));
    let mut state = GameState::new(config).unwrap();
    let game = WarGame::new();

    for _ in 0..50_000 {
        match game.tick(&mut state).unwrap() {
            Tick::Continue(TickEvent::War { .. }) => panic!("war in simple mode"),
            Tick::Continue(_) => {}
            Tick::Finished(outcome) => {
                assert_ne!(outcome, Outcome::NoResolution);
                break;
            }
        }
    }
    assert_eq!(state.stats.wars, 0);
}

/// Two tied single cards cycle forever in simple mode; the tick limit stops it.
#[test]
fn test_simple_mode_stall_detected() {
    let config = SimConfig::new(0, GameMode::Simple, 10).with_tick_limit(Some(1000));
    let mut state = GameState::from_hands(config, &cards(&[4]), &cards(&[5])).unwrap();

    let err = Simulator::new().run_state(&mut state).unwrap_err();

    assert_eq!(err, SimError::Stalled { ticks: 1000 });
    assert_eq!(state.stats.cycles, 1000);
}

/// Both war variants keep every card in play.
#[test]
fn test_war_variants_conserve_cards() {
    for rules in [WarRules::default(), WarRules::loser_only()] {
        for seed in 0..30 {
            let config = SimConfig::new(seed, GameMode::Standard, 5000).with_war_rules(rules);
            let mut state = GameState::new(config).unwrap();
            let game = WarGame::new();

            while let Tick::Continue(_) = game.tick(&mut state).unwrap() {
                assert_eq!(state.total_cards(), DECK_SIZE);
            }
            assert_eq!(state.total_cards(), DECK_SIZE);
        }
    }
}

/// Batch totals line up with individual runs.
#[test]
fn test_batch_matches_individual_runs() {
    let config = SimConfig::new(0, GameMode::Standard, 500);
    let sim = Simulator::new();

    let batch = sim.run_batch(10..30, &config).unwrap();
    let mut a_wins = 0;
    for seed in 10..30 {
        if sim.run(&config.clone().with_seed(seed)).unwrap().outcome == Outcome::PlayerAWins {
            a_wins += 1;
        }
    }

    assert_eq!(batch.games, 20);
    assert_eq!(batch.count(Outcome::PlayerAWins), a_wins);
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Every standard game ends within budget + 1 ticks, with cards conserved.
    #[test]
    fn prop_standard_game_terminates(seed in any::<u64>(), budget in 0u64..1500) {
        let mut state = GameState::new(SimConfig::new(seed, GameMode::Standard, budget)).unwrap();
        let game = WarGame::new();
        let mut ticks = 0u64;

        loop {
            match game.tick(&mut state).unwrap() {
                Tick::Continue(_) => {
                    ticks += 1;
                    prop_assert_eq!(state.total_cards(), DECK_SIZE);
                    prop_assert!(ticks <= budget + 1);
                }
                Tick::Finished(_) => break,
            }
        }
    }

    /// Same config, same report.
    #[test]
    fn prop_reports_reproducible(seed in any::<u64>(), simple in any::<bool>()) {
        let mode = if simple { GameMode::Simple } else { GameMode::Standard };
        let config = SimConfig::new(seed, mode, 400).with_tick_limit(Some(20_000));
        let sim = Simulator::new();

        prop_assert_eq!(sim.run(&config), sim.run(&config));
    }
}

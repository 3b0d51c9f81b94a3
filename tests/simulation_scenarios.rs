//! End-to-end scenarios for the simulation drivers

use dandelion::{
    Coord, Direction, Error, Game, GameState, Outcome, PerfectGameSearch, SearchConfig,
    SimulationConfig, SimulationRunner, Strategy,
    dandelion::{CELL_COUNT, MAX_TURNS},
    policies::{GreedyPlacement, RandomPlacement, RandomWind},
    ports::PlacementPolicy,
    simulation::{play_trial, run_simulation},
};
use rand::{SeedableRng, rngs::StdRng};

#[test]
fn random_simulation_is_deterministic_for_a_seed() {
    let run = |seed| {
        let mut rng = StdRng::seed_from_u64(seed);
        run_simulation(Strategy::Random, 1_000, &mut rng).unwrap()
    };

    let first = run(2026);
    let second = run(2026);
    assert_eq!(first, second);
    assert_eq!(first.games, 1_000);
}

#[test]
fn greedy_simulation_is_deterministic_for_a_seed() {
    let config = SimulationConfig::new(Strategy::Greedy, 1_000).with_seed(8);
    let first = SimulationRunner::new(config.clone()).run().unwrap();
    let second = SimulationRunner::new(config).run().unwrap();
    assert_eq!(first, second);
    assert_eq!(first.strategy, "greedy");
}

#[test]
fn random_play_wins_often() {
    // About a third of random games fill the board and most leave at most 3 cells
    let mut rng = StdRng::seed_from_u64(1);
    let stats = run_simulation(Strategy::Random, 5_000, &mut rng).unwrap();
    assert!(stats.strict_win_pct > 20.0 && stats.strict_win_pct < 50.0);
    assert!(stats.relaxed_win_pct > stats.strict_win_pct);
    assert_eq!(stats.min_empty, 0);
}

#[test]
fn search_returns_a_perfect_history() {
    let config = SearchConfig::default().with_seed(77).with_max_attempts(1_000);
    let result = PerfectGameSearch::new(config).search().unwrap();

    assert!(result.history.len() <= MAX_TURNS);
    assert_eq!(result.history.last().unwrap().remaining, 0);
    assert_eq!(result.final_state.empty_count(), 0);

    let mut directions: Vec<Direction> = result.history.iter().map(|r| r.direction).collect();
    directions.sort();
    directions.dedup();
    assert_eq!(directions.len(), result.history.len());

    let total: usize = result.history.iter().map(|r| r.filled).sum();
    assert_eq!(total + result.history.len(), CELL_COUNT);
}

#[test]
fn search_cap_is_respected() {
    let outcomes: Vec<_> = (0..32u64)
        .map(|seed| {
            let config = SearchConfig::default().with_seed(seed).with_max_attempts(2);
            PerfectGameSearch::new(config).search()
        })
        .collect();

    for outcome in &outcomes {
        match outcome {
            Ok(result) => assert!(result.attempts <= 2),
            Err(err) => assert_eq!(err, &Error::SearchExhausted { attempts: 2 }),
        }
    }
}

#[test]
fn trials_never_reuse_directions_or_exceed_eight_winds() {
    let mut rng = StdRng::seed_from_u64(5150);
    let mut greedy = GreedyPlacement;
    let mut random = RandomPlacement;
    for i in 0..500 {
        let placement: &mut dyn PlacementPolicy = if i % 2 == 0 { &mut greedy } else { &mut random };
        let game = play_trial(placement, &mut RandomWind, &mut rng).unwrap();

        let used = game.pool().used();
        assert!(used.len() <= MAX_TURNS);
        let mut unique = used.to_vec();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), used.len());
        assert!(game.outcome().is_some());
    }
}

#[test]
fn greedy_opening_is_the_center() {
    let mut rng = StdRng::seed_from_u64(0);
    let game = play_trial(&mut GreedyPlacement, &mut RandomWind, &mut rng).unwrap();
    assert_eq!(game.history()[0].placement, Coord::new(2, 2));
}

#[test]
fn manual_game_reports_winner() {
    let mut game = Game::new();
    let mut state = GameState::new();
    for direction in Direction::ALL {
        if game.is_over() {
            break;
        }
        let coord = game.state().empty_cells()[0];
        game.place(coord).unwrap();
        state.place(coord);
        let filled = game.blow(direction).unwrap();
        assert_eq!(state.apply_wind(direction), filled);
    }

    let expected = if state.is_full() {
        Outcome::PlanterWins
    } else {
        Outcome::WindWins {
            empty_left: state.empty_count(),
        }
    };
    assert_eq!(game.outcome(), Some(expected));
}

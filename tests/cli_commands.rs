use clap::Parser;
use dandelion::{
    Strategy,
    cli::commands::{
        compare::{CompareArgs, compare},
        search::{SearchArgs, execute as execute_search},
        simulate::{SimulateArgs, execute as execute_simulate},
    },
};

#[test]
fn simulate_command_runs_with_seed() {
    let args = SimulateArgs::parse_from([
        "dandelion-simulate",
        "--strategy",
        "greedy",
        "--games",
        "100",
        "--seed",
        "3",
        "--no-progress",
    ]);
    assert_eq!(args.strategy, Strategy::Greedy);
    execute_simulate(args).expect("simulation should succeed");
}

#[test]
fn search_command_finds_a_game() {
    let args = SearchArgs::parse_from([
        "dandelion-search",
        "--seed",
        "12",
        "--max-attempts",
        "1000",
        "--no-progress",
    ]);
    execute_search(args).expect("search should find a perfect game");
}

#[test]
fn compare_defaults() {
    let args = CompareArgs::parse_from(["dandelion-compare"]);
    assert_eq!(args.games, 10_000);
    assert_eq!(args.seed, None);

    let results = compare(50, 1).unwrap();
    assert_eq!(results.len(), Strategy::ALL.len());
}

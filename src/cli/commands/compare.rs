//! Compare command - every Planter strategy on the same random winds

use anyhow::{Result, anyhow};
use clap::Parser;
use log::info;

use crate::{
    cli::output::{format_number, print_kv, print_section},
    policies::Strategy,
    simulation::{SimulationConfig, SimulationRunner, SimulationStats},
};

#[derive(Parser, Debug, Clone)]
#[command(about = "Compare Planter strategies side-by-side")]
pub struct CompareArgs {
    /// Number of games per strategy
    #[arg(long, short = 'g', default_value_t = 10_000)]
    pub games: u64,

    /// Random seed shared by every strategy
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run every strategy with the same seed.
///
/// Each trial draws its winds from its own stream, so game `n` of every
/// strategy sees the same wind sequence, cut short if the board fills early.
pub fn compare(games: u64, seed: u64) -> crate::Result<Vec<SimulationStats>> {
    Strategy::ALL
        .into_iter()
        .map(|strategy| {
            info!("comparing {strategy}");
            let config = SimulationConfig::new(strategy, games).with_seed(seed);
            SimulationRunner::new(config).run()
        })
        .collect()
}

pub fn execute(args: CompareArgs) -> Result<()> {
    if args.games == 0 {
        return Err(anyhow!("--games must be at least 1"));
    }

    // Draw a seed up front so both strategies share it
    let seed = args.seed.unwrap_or_else(rand::random);
    let results = compare(args.games, seed)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    print_section("Strategy comparison");
    print_kv("Games per strategy", &format_number(args.games));
    print_kv("Seed", &seed.to_string());
    println!();
    println!(
        "  {:<10} {:>10} {:>6} {:>12} {:>12}",
        "Strategy", "Avg empty", "Best", "Strict wins", "Relaxed wins"
    );
    for stats in &results {
        println!(
            "  {:<10} {:>10.2} {:>6} {:>11.2}% {:>11.2}%",
            stats.strategy,
            stats.average_empty,
            stats.min_empty,
            stats.strict_win_pct,
            stats.relaxed_win_pct
        );
    }
    Ok(())
}

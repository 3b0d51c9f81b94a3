//! Dandelion CLI - win statistics and perfect-game search
//!
//! With no subcommand it runs a 100,000 game simulation with the random
//! strategy, then searches for a perfect game.

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "dandelion")]
#[command(version, about = "Monte-Carlo simulator for the Dandelion grid game", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate games with a Planter strategy against a random Wind
    Simulate(dandelion::cli::commands::simulate::SimulateArgs),

    /// Search for a game that fills the whole board
    Search(dandelion::cli::commands::search::SearchArgs),

    /// Compare Planter strategies side-by-side
    Compare(dandelion::cli::commands::compare::CompareArgs),
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Simulate(args)) => dandelion::cli::commands::simulate::execute(args),
        Some(Commands::Search(args)) => dandelion::cli::commands::search::execute(args),
        Some(Commands::Compare(args)) => dandelion::cli::commands::compare::execute(args),
        None => dandelion::cli::commands::run_default(),
    }
}

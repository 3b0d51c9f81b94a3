//! CLI command implementations

pub mod compare;
pub mod search;
pub mod simulate;

use anyhow::Result;

/// Run with no subcommand: a 100,000 game random-strategy batch followed by
/// a perfect-game search.
pub fn run_default() -> Result<()> {
    println!("Simulating Win Probability...");
    simulate::execute(simulate::SimulateArgs::default())?;
    println!();
    search::execute(search::SearchArgs::default())
}

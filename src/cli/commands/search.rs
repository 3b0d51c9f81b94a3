//! Search command - find a perfect game by random play

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::output::format_search_report,
    simulation::{PerfectGameSearch, ProgressObserver, SearchConfig},
};

#[derive(Parser, Debug, Clone, Default)]
#[command(about = "Search for a game that fills the whole board")]
pub struct SearchArgs {
    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Stop after this many failed games (default: search until found)
    #[arg(long)]
    pub max_attempts: Option<u64>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Disable the progress spinner
    #[arg(long)]
    pub no_progress: bool,
}

pub fn execute(args: SearchArgs) -> Result<()> {
    let config = SearchConfig {
        seed: args.seed,
        max_attempts: args.max_attempts,
    };

    let mut search = PerfectGameSearch::new(config);
    if !args.no_progress && !args.json {
        search = search.with_observer(Box::new(ProgressObserver::new()));
    }

    if !args.json {
        println!("Searching for a PERFECT GAME sequence...");
    }
    let result = search.search()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!();
        print!("{}", format_search_report(&result));
    }
    Ok(())
}

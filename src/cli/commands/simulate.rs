//! Simulate command - win statistics for a Planter strategy

use std::sync::{Arc, Mutex};

use anyhow::{Result, anyhow};
use clap::Parser;
use serde_json::json;

use crate::{
    cli::output::{format_histogram, format_simulation_report},
    policies::Strategy,
    simulation::{
        HistogramObserver, ProgressObserver, RemainingHistogram, SimulationConfig,
        SimulationRunner,
    },
};

#[derive(Parser, Debug, Clone)]
#[command(about = "Simulate games against a random wind")]
pub struct SimulateArgs {
    /// Planter strategy
    #[arg(long, short = 's', value_enum, default_value_t = Strategy::Random)]
    pub strategy: Strategy,

    /// Number of games to simulate
    #[arg(long, short = 'g', default_value_t = 100_000)]
    pub games: u64,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Also print the distribution of empty cells left
    #[arg(long)]
    pub histogram: bool,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Disable the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

impl Default for SimulateArgs {
    fn default() -> Self {
        Self::parse_from(["simulate"])
    }
}

pub fn execute(args: SimulateArgs) -> Result<()> {
    if args.games == 0 {
        return Err(anyhow!("--games must be at least 1"));
    }

    let (mut runner, histogram) = build_runner(&args);
    let stats = runner.run()?;
    let histogram = histogram.map(take_histogram);

    if args.json {
        let mut value = json!({ "simulation": stats });
        if let Some(histogram) = &histogram {
            value["histogram"] = serde_json::to_value(histogram)?;
        }
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    print!("{}", format_simulation_report(&stats));
    if let Some(histogram) = &histogram {
        println!();
        print!("{}", format_histogram(histogram));
    }
    Ok(())
}

type SharedHistogram = Arc<Mutex<RemainingHistogram>>;

/// Runner for `args`, with the histogram handle when `--histogram` is set
fn build_runner(args: &SimulateArgs) -> (SimulationRunner, Option<SharedHistogram>) {
    let mut config = SimulationConfig::new(args.strategy, args.games);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let mut runner = SimulationRunner::new(config);
    let mut histogram = None;
    if args.histogram {
        let (observer, shared) = HistogramObserver::new();
        runner = runner.with_observer(Box::new(observer));
        histogram = Some(shared);
    }
    if !args.no_progress && !args.json {
        runner = runner.with_observer(Box::new(ProgressObserver::new()));
    }
    (runner, histogram)
}

fn take_histogram(shared: SharedHistogram) -> RemainingHistogram {
    let guard = shared.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

//! Monte-Carlo drivers built on the game engine
//!
//! - [`trial`]: play one game with a placement and a wind policy
//! - [`runner`]: batches of trials and aggregate statistics
//! - [`search`]: random search for a perfect game
//! - [`observers`]: progress and distribution observers

pub mod observers;
pub mod runner;
pub mod search;
pub mod trial;

use rand::{SeedableRng, random, rngs::StdRng};

pub use observers::{HistogramObserver, ProgressObserver, RemainingHistogram};
pub use runner::{
    RELAXED_WIN_THRESHOLD, SimulationConfig, SimulationRunner, SimulationStats, run_simulation,
};
pub use search::{PerfectGameSearch, SearchConfig, SearchResult};
pub use trial::play_trial;

/// Seeded generator when a seed is given, otherwise seeded from entropy
pub fn make_rng(seed: Option<u64>) -> StdRng {
    StdRng::seed_from_u64(seed.unwrap_or_else(random))
}

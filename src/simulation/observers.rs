//! Observers for simulation batches

use std::sync::{Arc, Mutex, MutexGuard};

use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    dandelion::{CELL_COUNT, Game},
    ports::Observer,
};

/// Progress bar observer - bar for fixed batches, spinner for open searches
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    perfect: u64,
}

impl ProgressObserver {
    /// Create a new progress observer
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            perfect: 0,
        }
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for ProgressObserver {
    fn on_batch_start(&mut self, total_trials: Option<u64>) -> Result<()> {
        let pb = match total_trials {
            Some(total) => {
                let pb = ProgressBar::new(total);
                pb.set_style(
                    ProgressStyle::default_bar()
                        .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")
                        .map_err(template_error)?
                        .progress_chars("=>-"),
                );
                pb
            }
            None => {
                let pb = ProgressBar::new_spinner();
                pb.set_style(
                    ProgressStyle::default_spinner()
                        .template("{spinner:.green} {pos} attempts ({msg})")
                        .map_err(template_error)?,
                );
                pb
            }
        };
        self.progress_bar = Some(pb);
        self.perfect = 0;
        Ok(())
    }

    fn on_trial_end(&mut self, trial_num: u64, game: &Game) -> Result<()> {
        if game.state().is_full() {
            self.perfect += 1;
        }

        if let Some(pb) = &self.progress_bar {
            pb.set_position(trial_num + 1);
            // Message redraw throttled
            if trial_num.is_multiple_of(1_000) {
                pb.set_message(format!("perfect: {}", self.perfect));
            }
        }
        Ok(())
    }

    fn on_batch_end(&mut self) -> Result<()> {
        if let Some(pb) = self.progress_bar.take() {
            pb.finish_and_clear();
        }
        Ok(())
    }
}

fn template_error(e: impl std::fmt::Display) -> Error {
    Error::ProgressBarTemplate {
        message: e.to_string(),
    }
}

/// Distribution of empty cells left at the end of each game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemainingHistogram {
    /// `counts[k]` is the number of games that ended with `k` empty cells
    pub counts: Vec<u64>,
}

impl RemainingHistogram {
    pub fn new() -> Self {
        Self {
            counts: vec![0; CELL_COUNT + 1],
        }
    }

    pub fn record(&mut self, empty_left: usize) {
        self.counts[empty_left.min(CELL_COUNT)] += 1;
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Non-zero buckets as `(empty_left, games)`
    pub fn buckets(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(empty, &count)| (empty, count))
    }
}

impl Default for RemainingHistogram {
    fn default() -> Self {
        Self::new()
    }
}

/// Observer that fills a shared [`RemainingHistogram`].
///
/// The runner owns its observers, so the histogram is shared through a
/// handle that stays readable after the batch.
pub struct HistogramObserver {
    histogram: Arc<Mutex<RemainingHistogram>>,
}

impl HistogramObserver {
    /// Create the observer and the handle used to read the histogram back
    pub fn new() -> (Self, Arc<Mutex<RemainingHistogram>>) {
        let histogram = Arc::new(Mutex::new(RemainingHistogram::new()));
        (
            Self {
                histogram: Arc::clone(&histogram),
            },
            histogram,
        )
    }
}

impl HistogramObserver {
    fn histogram(&self) -> MutexGuard<'_, RemainingHistogram> {
        self.histogram
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Observer for HistogramObserver {
    fn on_batch_start(&mut self, _total_trials: Option<u64>) -> Result<()> {
        *self.histogram() = RemainingHistogram::new();
        Ok(())
    }

    fn on_trial_end(&mut self, _trial_num: u64, game: &Game) -> Result<()> {
        self.histogram().record(game.state().empty_count());
        Ok(())
    }
}

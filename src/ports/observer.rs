//! Observer port - hooks around batches of simulated games
//!
//! Observers collect progress and diagnostics without coupling the drivers
//! to a particular output.

use crate::{Result, dandelion::Game};

/// Observer trait for monitoring a batch of trials
///
/// # Event Sequence
///
/// 1. `on_batch_start(total)` - once, `None` for an unbounded search
/// 2. `on_trial_end(trial_num, game)` - after every trial
/// 3. `on_batch_end()` - once at the end
///
/// # Examples
///
/// ```no_run
/// use dandelion::{dandelion::Game, ports::Observer};
///
/// struct PerfectCounter {
///     perfect: usize,
/// }
///
/// impl Observer for PerfectCounter {
///     fn on_trial_end(&mut self, _trial_num: u64, game: &Game) -> dandelion::Result<()> {
///         if game.state().is_full() {
///             self.perfect += 1;
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Observer: Send {
    /// Called before the first trial.
    ///
    /// `total_trials` is `None` when the number of trials is not known
    /// up front.
    fn on_batch_start(&mut self, _total_trials: Option<u64>) -> Result<()> {
        Ok(())
    }

    /// Called after each trial with the finished game
    fn on_trial_end(&mut self, _trial_num: u64, _game: &Game) -> Result<()> {
        Ok(())
    }

    fn on_batch_end(&mut self) -> Result<()> {
        Ok(())
    }
}

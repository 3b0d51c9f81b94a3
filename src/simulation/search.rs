//! Random search for a perfect game
//!
//! Both players move uniformly at random. Trials are thrown away until one
//! ends with every cell planted or filled; that trial's turn history is the
//! result. Under random play roughly a third of games are perfect, but the
//! search itself has no upper bound unless `max_attempts` is set.

use log::{info, trace};
use rand::RngCore;
use serde::{Deserialize, Serialize};

use super::{make_rng, trial::play_trial};
use crate::{
    Error, Result,
    dandelion::{GameState, TurnRecord},
    policies::{RandomPlacement, RandomWind},
    ports::Observer,
};

/// Search configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Random seed
    pub seed: Option<u64>,

    /// Give up after this many failed trials, `None` searches forever
    pub max_attempts: Option<u64>,
}

impl SearchConfig {
    /// Set the random seed for deterministic runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Cap the number of trials.
    pub fn with_max_attempts(mut self, max_attempts: u64) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }
}

/// A perfect game and how long it took to find
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Trials played, including the winning one
    pub attempts: u64,

    /// Turns of the winning game in order
    pub history: Vec<TurnRecord>,

    /// The full board at the end of the winning game
    pub final_state: GameState,
}

/// Rejection search for a game that fills the whole board
pub struct PerfectGameSearch {
    config: SearchConfig,
    observers: Vec<Box<dyn Observer>>,
}

impl PerfectGameSearch {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            observers: Vec::new(),
        }
    }

    /// Add an observer to the search
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Search, seeding from the config when a seed is set
    pub fn search(&mut self) -> Result<SearchResult> {
        let mut rng = make_rng(self.config.seed);
        self.search_with_rng(&mut rng)
    }

    /// Search drawing all randomness from `rng`
    ///
    /// # Errors
    ///
    /// Returns [`Error::SearchExhausted`] when `max_attempts` trials fail.
    pub fn search_with_rng(&mut self, rng: &mut dyn RngCore) -> Result<SearchResult> {
        if self.config.max_attempts == Some(0) {
            return Err(Error::InvalidConfiguration {
                message: "max_attempts must be at least 1".to_string(),
            });
        }

        info!("searching for a perfect game");
        for observer in &mut self.observers {
            observer.on_batch_start(self.config.max_attempts)?;
        }

        let mut placement = RandomPlacement;
        let mut wind = RandomWind;
        let mut attempts: u64 = 0;

        let found = loop {
            attempts += 1;
            let game = play_trial(&mut placement, &mut wind, rng)?;

            for observer in &mut self.observers {
                observer.on_trial_end(attempts - 1, &game)?;
            }

            if game.state().is_full() {
                break Some(game);
            }
            trace!(
                "attempt {attempts}: {} cells left",
                game.state().empty_count()
            );

            if self.config.max_attempts.is_some_and(|max| attempts >= max) {
                break None;
            }
        };

        for observer in &mut self.observers {
            observer.on_batch_end()?;
        }

        match found {
            Some(game) => {
                info!("perfect game found after {attempts} attempts");
                Ok(SearchResult {
                    attempts,
                    history: game.history().to_vec(),
                    final_state: game.state().clone(),
                })
            }
            None => Err(Error::SearchExhausted { attempts }),
        }
    }
}

//! Fixed player heuristics
//!
//! Planter policies:
//! - [`RandomPlacement`]: uniform over the empty cells
//! - [`GreedyPlacement`]: the empty cell nearest the board center
//!
//! Wind policies:
//! - [`RandomWind`]: uniform over the directions left in the pool

use std::fmt;

use clap::ValueEnum;
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    dandelion::{Coord, Direction, DirectionPool, GameState},
    ports::{PlacementPolicy, WindPolicy},
};

/// Planter strategy selected when a simulation is configured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Plant on a uniformly random empty cell
    #[default]
    Random,
    /// Plant on the empty cell closest to the center
    Greedy,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Random, Strategy::Greedy];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Random => "random",
            Strategy::Greedy => "greedy",
        }
    }

    /// Build the placement policy for this strategy
    pub fn policy(self) -> Box<dyn PlacementPolicy> {
        match self {
            Strategy::Random => Box::new(RandomPlacement),
            Strategy::Greedy => Box::new(GreedyPlacement),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Uniformly random placement
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPlacement;

impl PlacementPolicy for RandomPlacement {
    fn select_placement(
        &mut self,
        _state: &GameState,
        empty: &[Coord],
        rng: &mut dyn RngCore,
    ) -> Result<Coord> {
        if empty.is_empty() {
            return Err(Error::NoEmptyCells);
        }
        let index = rng.random_range(0..empty.len());
        Ok(empty[index])
    }

    fn name(&self) -> &str {
        Strategy::Random.name()
    }
}

/// Center heuristic: minimum squared distance to `(2.5, 2.5)`.
///
/// Ties keep the earliest cell in row-major order, so with only (1,1) and
/// (4,4) empty the policy picks (1,1).
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyPlacement;

impl PlacementPolicy for GreedyPlacement {
    fn select_placement(
        &mut self,
        _state: &GameState,
        empty: &[Coord],
        _rng: &mut dyn RngCore,
    ) -> Result<Coord> {
        let mut best: Option<(Coord, f64)> = None;
        for &coord in empty {
            let distance = coord.center_distance_sq();
            // Strict comparison keeps the first of equally distant cells
            if best.is_none_or(|(_, best_distance)| distance < best_distance) {
                best = Some((coord, distance));
            }
        }
        best.map(|(coord, _)| coord).ok_or(Error::NoEmptyCells)
    }

    fn name(&self) -> &str {
        Strategy::Greedy.name()
    }
}

/// Uniformly random wind drawn from the remaining pool
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomWind;

impl WindPolicy for RandomWind {
    fn select_direction(
        &mut self,
        _state: &GameState,
        pool: &DirectionPool,
        rng: &mut dyn RngCore,
    ) -> Result<Direction> {
        pool.choose(rng).ok_or(Error::NoDirectionsLeft)
    }

    fn name(&self) -> &str {
        "random"
    }
}

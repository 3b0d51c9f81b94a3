//! Dandelion game simulator
//!
//! This crate provides:
//! - The Dandelion board engine: seed placement and wind propagation
//! - A rule-enforcing game with turn history and undo
//! - Fixed Planter heuristics (random, center-greedy) and a random Wind
//! - Monte-Carlo win statistics and a random search for a perfect game

pub mod cli;
pub mod dandelion;
pub mod error;
pub mod policies;
pub mod ports;
pub mod simulation;

pub use dandelion::{Cell, Coord, Direction, DirectionPool, Game, GameState, Outcome, TurnRecord};
pub use error::{Error, Result};
pub use policies::Strategy;
pub use simulation::{
    PerfectGameSearch, SearchConfig, SearchResult, SimulationConfig, SimulationRunner,
    SimulationStats,
};

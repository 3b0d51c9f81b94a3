//! Ports (trait boundaries) between the game engine and the drivers.
//!
//! The simulation drivers only talk to players and observers through these
//! traits; concrete heuristics and reporters live in `policies` and
//! `simulation::observers`.

pub mod observer;
pub mod policy;

pub use observer::Observer;
pub use policy::{PlacementPolicy, WindPolicy};

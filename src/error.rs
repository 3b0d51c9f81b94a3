//! Error types for the Dandelion crate

use thiserror::Error;

use crate::dandelion::{Coord, Direction};

/// Main error type for the Dandelion crate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("cell {coord} is already occupied")]
    CellOccupied { coord: Coord },

    #[error("coordinate ({x}, {y}) is out of bounds (board is {size}x{size})")]
    OutOfBounds { x: usize, y: usize, size: usize },

    #[error("wind direction {direction} has already been used this game")]
    DirectionUsed { direction: Direction },

    #[error("unknown wind direction '{input}'. Expected one of: {expected}")]
    ParseDirection { input: String, expected: String },

    #[error("it is not the {expected} phase (current phase: {actual})")]
    WrongPhase { expected: String, actual: String },

    #[error("game already over")]
    GameOver,

    #[error("nothing to undo")]
    NothingToUndo,

    #[error("no empty cells available")]
    NoEmptyCells,

    #[error("no wind directions left in the pool")]
    NoDirectionsLeft,

    #[error("policy '{policy}' chose {coord}, which cannot be planted")]
    IllegalPlacement { policy: String, coord: Coord },

    #[error("no perfect game found within {attempts} attempts")]
    SearchExhausted { attempts: u64 },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

//! Dandelion game implementation

pub mod board;
pub mod direction;
pub mod game;
pub mod wind;

pub use board::{CELL_COUNT, Cell, Coord, GRID_SIZE, GameState};
pub use direction::{Direction, DirectionPool};
pub use game::{Game, MAX_TURNS, Outcome, Phase, TurnRecord};
pub use wind::blow;

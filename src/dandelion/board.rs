//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{direction::Direction, wind};

/// Side length of the square board
pub const GRID_SIZE: usize = 6;

/// Total number of cells on the board
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// A cell on the Dandelion board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    /// A planted seed
    Token,
    /// Covered by wind-blown seeds
    Filled,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Token => '*',
            Cell::Filled => 'o',
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// A zero-based board coordinate, `x` is the column and `y` the row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    pub fn in_bounds(self) -> bool {
        self.x < GRID_SIZE && self.y < GRID_SIZE
    }

    /// Step once along `direction`, returning `None` when leaving the board
    pub fn step(self, direction: Direction) -> Option<Coord> {
        let (dx, dy) = direction.delta();
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        let next = Coord::new(x, y);
        next.in_bounds().then_some(next)
    }

    /// Column and row as shown to players (1-based)
    pub fn one_based(self) -> (usize, usize) {
        (self.x + 1, self.y + 1)
    }

    /// Squared Euclidean distance to the board center `((S-1)/2, (S-1)/2)`
    pub fn center_distance_sq(self) -> f64 {
        let center = (GRID_SIZE as f64 - 1.0) / 2.0;
        let dx = self.x as f64 - center;
        let dy = self.y as f64 - center;
        dx * dx + dy * dy
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Complete board state: cells, planted tokens in placement order and the
/// running count of empty cells.
///
/// `empty_count` is maintained incrementally and always equals
/// `CELL_COUNT - tokens - filled`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    cells: [[Cell; GRID_SIZE]; GRID_SIZE],
    tokens: Vec<Coord>,
    empty_count: usize,
}

impl GameState {
    /// Create an empty board
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; GRID_SIZE]; GRID_SIZE],
            tokens: Vec::new(),
            empty_count: CELL_COUNT,
        }
    }

    /// Get the cell at a coordinate, `None` when out of bounds
    pub fn cell(&self, coord: Coord) -> Option<Cell> {
        coord.in_bounds().then(|| self.cells[coord.y][coord.x])
    }

    pub fn is_empty(&self, coord: Coord) -> bool {
        self.cell(coord) == Some(Cell::Empty)
    }

    /// All empty coordinates in row-major order (y outer, x inner).
    ///
    /// Strategies rely on this order for tie-breaking.
    pub fn empty_cells(&self) -> Vec<Coord> {
        let mut cells = Vec::with_capacity(self.empty_count);
        for (y, row) in self.cells.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                if cell.is_empty() {
                    cells.push(Coord::new(x, y));
                }
            }
        }
        cells
    }

    /// Plant a token, returning `false` without touching the board when the
    /// cell is occupied or off the board.
    pub fn place(&mut self, coord: Coord) -> bool {
        self.try_place(coord).is_ok()
    }

    /// Plant a token, reporting why the placement was refused
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfBounds`] or [`crate::Error::CellOccupied`].
    pub fn try_place(&mut self, coord: Coord) -> Result<(), crate::Error> {
        if !coord.in_bounds() {
            return Err(crate::Error::OutOfBounds {
                x: coord.x,
                y: coord.y,
                size: GRID_SIZE,
            });
        }
        if !self.cells[coord.y][coord.x].is_empty() {
            return Err(crate::Error::CellOccupied { coord });
        }

        self.cells[coord.y][coord.x] = Cell::Token;
        self.tokens.push(coord);
        self.empty_count -= 1;
        Ok(())
    }

    /// Blow the wind over the board in place, returning the cells filled
    pub fn apply_wind(&mut self, direction: Direction) -> usize {
        let (next, filled) = wind::blow(self, direction);
        *self = next;
        filled
    }

    /// Mark an empty cell as filled. Returns whether the cell changed.
    pub(super) fn fill(&mut self, coord: Coord) -> bool {
        let cell = &mut self.cells[coord.y][coord.x];
        if !cell.is_empty() {
            return false;
        }
        *cell = Cell::Filled;
        self.empty_count -= 1;
        true
    }

    /// Planted tokens in placement order
    pub fn tokens(&self) -> &[Coord] {
        &self.tokens
    }

    pub fn empty_count(&self) -> usize {
        self.empty_count
    }

    pub fn filled_count(&self) -> usize {
        CELL_COUNT - self.empty_count - self.tokens.len()
    }

    /// Whether every cell has been planted or filled
    pub fn is_full(&self) -> bool {
        self.empty_count == 0
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.iter().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            let line: String = row.iter().map(|cell| cell.to_char()).collect();
            write!(f, "{line}")?;
        }
        Ok(())
    }
}

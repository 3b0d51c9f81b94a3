//! Wind directions and the per-game direction pool

use std::{fmt, str::FromStr};

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

/// One of the eight compass directions the wind can blow in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Direction {
    /// All directions in canonical index order
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::NE,
        Direction::E,
        Direction::SE,
        Direction::S,
        Direction::SW,
        Direction::W,
        Direction::NW,
    ];

    /// Unit step `(dx, dy)`; y grows downwards
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::N => (0, -1),
            Direction::NE => (1, -1),
            Direction::E => (1, 0),
            Direction::SE => (1, 1),
            Direction::S => (0, 1),
            Direction::SW => (-1, 1),
            Direction::W => (-1, 0),
            Direction::NW => (-1, -1),
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Direction> {
        Self::ALL.get(index).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::N => "N",
            Direction::NE => "NE",
            Direction::E => "E",
            Direction::SE => "SE",
            Direction::S => "S",
            Direction::SW => "SW",
            Direction::W => "W",
            Direction::NW => "NW",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Direction::ALL
            .into_iter()
            .find(|dir| dir.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| crate::Error::ParseDirection {
                input: s.to_string(),
                expected: Direction::ALL.map(Direction::name).join(", "),
            })
    }
}

/// Directions still available in one game, drawn without replacement.
///
/// The pool also keeps the order in which directions were drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionPool {
    remaining: Vec<Direction>,
    used: Vec<Direction>,
}

impl DirectionPool {
    /// A full pool containing all eight directions
    pub fn new() -> Self {
        Self {
            remaining: Direction::ALL.to_vec(),
            used: Vec::with_capacity(Direction::ALL.len()),
        }
    }

    pub fn remaining(&self) -> &[Direction] {
        &self.remaining
    }

    pub fn used(&self) -> &[Direction] {
        &self.used
    }

    pub fn contains(&self, direction: Direction) -> bool {
        self.remaining.contains(&direction)
    }

    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    /// Remove `direction` from the pool
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::DirectionUsed`] when it was already drawn.
    pub fn take(&mut self, direction: Direction) -> Result<(), crate::Error> {
        let index = self
            .remaining
            .iter()
            .position(|&dir| dir == direction)
            .ok_or(crate::Error::DirectionUsed { direction })?;
        self.remaining.remove(index);
        self.used.push(direction);
        Ok(())
    }

    /// Pick a remaining direction uniformly at random without removing it
    pub fn choose(&self, rng: &mut dyn RngCore) -> Option<Direction> {
        if self.remaining.is_empty() {
            return None;
        }
        let index = rng.random_range(0..self.remaining.len());
        Some(self.remaining[index])
    }

    /// Put the most recently drawn direction back
    pub(super) fn restore_last(&mut self) -> Option<Direction> {
        let direction = self.used.pop()?;
        let index = self
            .remaining
            .iter()
            .position(|&dir| dir.index() > direction.index())
            .unwrap_or(self.remaining.len());
        self.remaining.insert(index, direction);
        Some(direction)
    }
}

impl Default for DirectionPool {
    fn default() -> Self {
        Self::new()
    }
}

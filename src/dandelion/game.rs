//! High-level game management

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{
    board::{Coord, GameState},
    direction::{Direction, DirectionPool},
};

/// Maximum number of place/blow turn pairs in one game
pub const MAX_TURNS: usize = Direction::ALL.len();

/// Whose action the game is waiting for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// The Planter places a seed
    Planting,
    /// The Wind picks a direction
    Blowing,
    Over,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Planting => "planting",
            Phase::Blowing => "blowing",
            Phase::Over => "game over",
        };
        f.write_str(name)
    }
}

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Every cell was planted or filled
    PlanterWins,
    WindWins { empty_left: usize },
}

impl Outcome {
    pub fn from_state(state: &GameState) -> Self {
        match state.empty_count() {
            0 => Outcome::PlanterWins,
            empty_left => Outcome::WindWins { empty_left },
        }
    }
}

/// One completed turn: a placement followed by a wind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnRecord {
    /// 1-based turn number
    pub turn: usize,
    pub placement: Coord,
    pub direction: Direction,
    /// Cells filled by this turn's wind
    pub filled: usize,
    /// Empty cells left after the wind
    pub remaining: usize,
}

#[derive(Debug, Clone)]
struct Snapshot {
    state: GameState,
    phase: Phase,
    pending: Option<Coord>,
    history_len: usize,
    pool_used: usize,
}

/// A complete game with history.
///
/// Enforces the turn order (plant, then blow), the one-use-per-direction
/// rule and ends the game when the board is full or the directions run out.
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
    pool: DirectionPool,
    phase: Phase,
    pending: Option<Coord>,
    history: Vec<TurnRecord>,
    undo_stack: Vec<Snapshot>,
    track_undo: bool,
}

impl Game {
    /// Create a new game on an empty board
    pub fn new() -> Self {
        Game {
            state: GameState::new(),
            pool: DirectionPool::new(),
            phase: Phase::Planting,
            pending: None,
            history: Vec::with_capacity(MAX_TURNS),
            undo_stack: Vec::new(),
            track_undo: true,
        }
    }

    /// Skip undo snapshots. Used by simulations, which never rewind.
    pub fn without_undo(mut self) -> Self {
        self.track_undo = false;
        self.undo_stack.clear();
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn pool(&self) -> &DirectionPool {
        &self.pool
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Completed turns in order
    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    /// 1-based number of the turn in progress
    pub fn turn(&self) -> usize {
        self.history.len() + 1
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::Over
    }

    /// The outcome once the game is over
    pub fn outcome(&self) -> Option<Outcome> {
        self.is_over().then(|| Outcome::from_state(&self.state))
    }

    /// Plant a seed for the current turn
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over, the Wind is to move, or the
    /// cell cannot be planted.
    pub fn place(&mut self, coord: Coord) -> Result<(), crate::Error> {
        self.expect_phase(Phase::Planting)?;

        let snapshot = self.track_undo.then(|| self.snapshot());
        self.state.try_place(coord)?;
        self.undo_stack.extend(snapshot);
        self.pending = Some(coord);
        self.phase = Phase::Blowing;
        Ok(())
    }

    /// Blow the wind for the current turn, returning the cells filled
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over, the Planter is to move, or the
    /// direction has already been used.
    pub fn blow(&mut self, direction: Direction) -> Result<usize, crate::Error> {
        self.expect_phase(Phase::Blowing)?;
        let placement = self.pending.ok_or_else(|| crate::Error::WrongPhase {
            expected: Phase::Blowing.to_string(),
            actual: self.phase.to_string(),
        })?;

        let snapshot = self.track_undo.then(|| self.snapshot());
        self.pool.take(direction)?;
        self.undo_stack.extend(snapshot);

        let filled = self.state.apply_wind(direction);
        self.history.push(TurnRecord {
            turn: self.history.len() + 1,
            placement,
            direction,
            filled,
            remaining: self.state.empty_count(),
        });
        self.pending = None;

        self.phase = if self.state.is_full() || self.pool.is_empty() {
            Phase::Over
        } else {
            Phase::Planting
        };

        Ok(filled)
    }

    /// Revert the most recent placement or wind
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NothingToUndo`] on a fresh game.
    pub fn undo(&mut self) -> Result<(), crate::Error> {
        let snapshot = self.undo_stack.pop().ok_or(crate::Error::NothingToUndo)?;

        while self.pool.used().len() > snapshot.pool_used {
            self.pool.restore_last();
        }
        self.history.truncate(snapshot.history_len);
        self.state = snapshot.state;
        self.phase = snapshot.phase;
        self.pending = snapshot.pending;
        Ok(())
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state.clone(),
            phase: self.phase,
            pending: self.pending,
            history_len: self.history.len(),
            pool_used: self.pool.used().len(),
        }
    }

    fn expect_phase(&self, expected: Phase) -> Result<(), crate::Error> {
        if self.phase == Phase::Over {
            return Err(crate::Error::GameOver);
        }
        if self.phase != expected {
            return Err(crate::Error::WrongPhase {
                expected: expected.to_string(),
                actual: self.phase.to_string(),
            });
        }
        Ok(())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dandelion::board::CELL_COUNT;

    #[test]
    fn place_then_blow_records_turn() {
        let mut game = Game::new();
        game.place(Coord::new(0, 0)).unwrap();
        assert_eq!(game.phase(), Phase::Blowing);

        let filled = game.blow(Direction::E).unwrap();
        assert_eq!(filled, 5);
        assert_eq!(game.state().empty_count(), 30);
        assert_eq!(
            game.history(),
            &[TurnRecord {
                turn: 1,
                placement: Coord::new(0, 0),
                direction: Direction::E,
                filled: 5,
                remaining: 30,
            }]
        );
        assert_eq!(game.phase(), Phase::Planting);
        assert_eq!(game.turn(), 2);
    }

    #[test]
    fn actions_out_of_turn_are_rejected() {
        let mut game = Game::new();
        assert!(matches!(
            game.blow(Direction::N),
            Err(crate::Error::WrongPhase { .. })
        ));

        game.place(Coord::new(1, 1)).unwrap();
        assert!(matches!(
            game.place(Coord::new(2, 2)),
            Err(crate::Error::WrongPhase { .. })
        ));
    }

    #[test]
    fn reusing_a_direction_is_rejected() {
        let mut game = Game::new();
        game.place(Coord::new(5, 5)).unwrap();
        game.blow(Direction::N).unwrap();
        game.place(Coord::new(0, 0)).unwrap();

        assert_eq!(
            game.blow(Direction::N),
            Err(crate::Error::DirectionUsed {
                direction: Direction::N
            })
        );
        // Still waiting for a valid wind
        assert_eq!(game.phase(), Phase::Blowing);
        assert!(game.blow(Direction::S).is_ok());
    }

    #[test]
    fn occupied_cell_is_rejected_without_state_change() {
        let mut game = Game::new();
        game.place(Coord::new(0, 0)).unwrap();
        game.blow(Direction::E).unwrap();
        let before = game.state().clone();

        assert_eq!(
            game.place(Coord::new(3, 0)),
            Err(crate::Error::CellOccupied {
                coord: Coord::new(3, 0)
            })
        );
        assert_eq!(game.state(), &before);
        assert_eq!(game.phase(), Phase::Planting);
    }

    #[test]
    fn game_ends_after_eight_winds() {
        let mut game = Game::new();
        // Tokens along the bottom row only blow into a small part of the board
        for (x, direction) in Direction::ALL.into_iter().enumerate() {
            let coord = game.state().empty_cells()[0];
            game.place(coord).unwrap();
            game.blow(direction).unwrap();
            if game.is_over() {
                assert!(x == MAX_TURNS - 1 || game.state().is_full());
                break;
            }
        }

        assert!(game.is_over());
        assert!(game.history().len() <= MAX_TURNS);
        assert_eq!(game.place(Coord::new(0, 0)), Err(crate::Error::GameOver));
        assert!(game.outcome().is_some());
    }

    #[test]
    fn outcome_reflects_empty_cells() {
        let mut state = GameState::new();
        assert_eq!(
            Outcome::from_state(&state),
            Outcome::WindWins {
                empty_left: CELL_COUNT
            }
        );
        for coord in state.empty_cells() {
            state.place(coord);
        }
        assert_eq!(Outcome::from_state(&state), Outcome::PlanterWins);
    }

    #[test]
    fn outcome_is_none_while_playing() {
        let mut game = Game::new();
        assert_eq!(game.outcome(), None);
        game.place(Coord::new(2, 3)).unwrap();
        assert_eq!(game.outcome(), None);
    }

    #[test]
    fn undo_reverts_wind_then_placement() {
        let mut game = Game::new();
        game.place(Coord::new(2, 2)).unwrap();
        let after_place = game.state().clone();
        game.blow(Direction::SE).unwrap();

        game.undo().unwrap();
        assert_eq!(game.state(), &after_place);
        assert_eq!(game.phase(), Phase::Blowing);
        assert!(game.history().is_empty());
        assert!(game.pool().contains(Direction::SE));

        game.undo().unwrap();
        assert_eq!(game.state(), &GameState::new());
        assert_eq!(game.phase(), Phase::Planting);

        assert_eq!(game.undo(), Err(crate::Error::NothingToUndo));
    }

    #[test]
    fn undo_reopens_a_finished_game() {
        let mut game = Game::new();
        for direction in Direction::ALL {
            if game.is_over() {
                break;
            }
            let coord = game.state().empty_cells()[0];
            game.place(coord).unwrap();
            game.blow(direction).unwrap();
        }
        assert!(game.is_over());
        let turns = game.history().len();

        game.undo().unwrap();
        assert_eq!(game.phase(), Phase::Blowing);
        assert_eq!(game.history().len(), turns - 1);
        assert_eq!(game.pool().len(), Direction::ALL.len() - (turns - 1));
    }

    #[test]
    fn untracked_game_cannot_undo() {
        let mut game = Game::new().without_undo();
        game.place(Coord::new(0, 0)).unwrap();
        game.blow(Direction::S).unwrap();
        assert_eq!(game.undo(), Err(crate::Error::NothingToUndo));
        assert_eq!(game.history().len(), 1);
    }
}

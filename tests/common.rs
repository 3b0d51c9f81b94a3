//! Common test utilities for the dandelion test suite.

use dandelion::{Coord, Direction, GameState};

/// Build a board by alternating placements and winds.
///
/// Each `(x, y, wind)` plants at `(x, y)` and then blows `wind`, if any.
/// Returns the board and the cells filled per turn.
pub fn play_turns(turns: &[(usize, usize, Option<Direction>)]) -> (GameState, Vec<usize>) {
    let mut state = GameState::new();
    let mut filled = Vec::with_capacity(turns.len());
    for &(x, y, wind) in turns {
        assert!(state.place(Coord::new(x, y)), "({x}, {y}) should be plantable");
        if let Some(direction) = wind {
            filled.push(state.apply_wind(direction));
        }
    }
    (state, filled)
}

/// Count cells of the board in each state by scanning every coordinate.
///
/// Returns `(empty, tokens, filled)`.
pub fn census(state: &GameState) -> (usize, usize, usize) {
    let mut counts = (0, 0, 0);
    for y in 0..dandelion::dandelion::GRID_SIZE {
        for x in 0..dandelion::dandelion::GRID_SIZE {
            match state.cell(Coord::new(x, y)) {
                Some(dandelion::Cell::Empty) => counts.0 += 1,
                Some(dandelion::Cell::Token) => counts.1 += 1,
                Some(dandelion::Cell::Filled) => counts.2 += 1,
                None => unreachable!("in-bounds coordinate"),
            }
        }
    }
    counts
}

//! Wind propagation
//!
//! Every token on the board seeds a straight ray in the wind direction. The
//! ray walks to the board edge and fills each empty cell it crosses. Tokens
//! and filled cells do not block a ray, and rays never wrap.

use super::{
    board::{Coord, GameState},
    direction::Direction,
};

/// Blow the wind over `state`, returning the resulting board and the number
/// of cells newly filled.
///
/// All tokens contribute, including the one planted this turn. Cells reached
/// by several rays are only counted once.
pub fn blow(state: &GameState, direction: Direction) -> (GameState, usize) {
    let mut next = state.clone();
    let mut filled = 0;

    for &token in state.tokens() {
        for coord in ray(token, direction) {
            if next.fill(coord) {
                filled += 1;
            }
        }
    }

    (next, filled)
}

/// Cells from `origin` (exclusive) to the board edge along `direction`
pub fn ray(origin: Coord, direction: Direction) -> impl Iterator<Item = Coord> {
    std::iter::successors(origin.step(direction), move |coord| coord.step(direction))
}

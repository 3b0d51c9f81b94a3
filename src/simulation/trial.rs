//! A single simulated game

use log::trace;
use rand::{RngCore, SeedableRng, rngs::StdRng};

use crate::{
    Error, Result,
    dandelion::{Game, MAX_TURNS},
    ports::{PlacementPolicy, WindPolicy},
};

/// Play one game: the Planter follows `placement`, the Wind follows `wind`.
///
/// The game runs for at most [`MAX_TURNS`] turns and stops early once the
/// board is full. Each turn the Planter picks from the current empty cells,
/// then the Wind draws a direction from the pool (no direction repeats).
///
/// Placement and wind draw from separate streams split off `rng`. Exactly two
/// words are taken from `rng` per trial, so the n-th trial of two batches with
/// the same seed gets the same wind stream whatever the Planter does.
///
/// # Errors
///
/// Returns [`Error::IllegalPlacement`] if the placement policy returns a cell
/// that cannot be planted, or any error reported by the policies.
pub fn play_trial(
    placement: &mut dyn PlacementPolicy,
    wind: &mut dyn WindPolicy,
    rng: &mut dyn RngCore,
) -> Result<Game> {
    let (mut placement_rng, mut wind_rng) = split_streams(rng);
    let mut game = Game::new().without_undo();

    for _ in 0..MAX_TURNS {
        let empty = game.state().empty_cells();
        if empty.is_empty() {
            break;
        }

        let coord = placement.select_placement(game.state(), &empty, &mut placement_rng)?;
        if let Err(err) = game.place(coord) {
            trace!("placement at {coord} refused: {err}");
            return Err(Error::IllegalPlacement {
                policy: placement.name().to_string(),
                coord,
            });
        }

        if game.pool().is_empty() {
            break;
        }
        let direction = wind.select_direction(game.state(), game.pool(), &mut wind_rng)?;
        game.blow(direction)?;

        if game.is_over() {
            break;
        }
    }

    Ok(game)
}

/// `(placement, wind)` streams for one trial
fn split_streams(rng: &mut dyn RngCore) -> (StdRng, StdRng) {
    let wind = StdRng::seed_from_u64(rng.next_u64());
    let placement = StdRng::seed_from_u64(rng.next_u64());
    (placement, wind)
}

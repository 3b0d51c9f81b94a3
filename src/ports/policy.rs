//! Policy ports - how each player picks its move
//!
//! Both players receive the random source explicitly so a single seeded
//! generator can drive a whole batch of trials reproducibly.

use rand::RngCore;

use crate::{
    Result,
    dandelion::{Coord, Direction, DirectionPool, GameState},
};

/// Planter policy: choose where the next seed goes.
///
/// # Examples
///
/// ```no_run
/// use dandelion::{
///     dandelion::{Coord, GameState},
///     ports::PlacementPolicy,
/// };
/// use rand::RngCore;
///
/// struct FirstEmpty;
///
/// impl PlacementPolicy for FirstEmpty {
///     fn select_placement(
///         &mut self,
///         _state: &GameState,
///         empty: &[Coord],
///         _rng: &mut dyn RngCore,
///     ) -> dandelion::Result<Coord> {
///         empty.first().copied().ok_or(dandelion::Error::NoEmptyCells)
///     }
///
///     fn name(&self) -> &str {
///         "first-empty"
///     }
/// }
/// ```
pub trait PlacementPolicy: Send {
    /// Select one of the `empty` cells, which are listed in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NoEmptyCells`] when `empty` is empty.
    fn select_placement(
        &mut self,
        state: &GameState,
        empty: &[Coord],
        rng: &mut dyn RngCore,
    ) -> Result<Coord>;

    /// Name used in reports and logs
    fn name(&self) -> &str;
}

/// Wind policy: choose a direction from those still in the pool
pub trait WindPolicy: Send {
    /// # Errors
    ///
    /// Returns [`crate::Error::NoDirectionsLeft`] when the pool is exhausted.
    fn select_direction(
        &mut self,
        state: &GameState,
        pool: &DirectionPool,
        rng: &mut dyn RngCore,
    ) -> Result<Direction>;

    fn name(&self) -> &str;
}

//! Entity movement system.
//!
//! This module computes and applies a single step on the grid.

use crate::world::error::WorldError;
use crate::world::grid::Grid;
use crate::world::types::{Direction, Position};

/// Move the occupant of `from` one step in the given direction.
///
/// The destination is validated before anything is written; an invalid
/// destination fails with `InvalidMove` and leaves the grid untouched. On
/// success the two cells swap contents, so nothing is duplicated or lost,
/// and the new position is returned.
pub fn move_entity(
    grid: &mut Grid,
    from: Position,
    direction: Direction,
) -> Result<Position, WorldError> {
    let to = direction
        .step_from(from)
        .filter(|p| grid.is_valid_coordinate(p.x, p.y))
        .ok_or(WorldError::InvalidMove { from, direction })?;

    let mover = grid.get(from.x, from.y)?;
    let displaced = grid.get(to.x, to.y)?;

    grid.put(to.x, to.y, mover)?;
    grid.put(from.x, from.y, displaced)?;

    Ok(to)
}

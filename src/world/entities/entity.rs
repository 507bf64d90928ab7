use serde::{Deserialize, Serialize};

use crate::world::error::WorldError;
use crate::world::grid::Grid;
use crate::world::types::{Cell, Position};

/// A labeled occupant of the grid.
///
/// The grid is the single source of truth for occupancy. `pos` is the last
/// position reported by a successful move, kept only for display and
/// logging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub name: String,
    pub symbol: char,
    pub pos: Position,
}

impl Entity {
    pub fn new(name: impl Into<String>, symbol: char, pos: Position) -> Self {
        Entity {
            name: name.into(),
            symbol,
            pos,
        }
    }

    /// Write the entity's symbol into the grid at its cached position.
    /// Used once at startup; afterwards the move swap keeps the symbol on
    /// the grid.
    pub fn place(&self, grid: &mut Grid) -> Result<(), WorldError> {
        grid.put(self.pos.x, self.pos.y, Cell::Entity(self.symbol))
    }
}

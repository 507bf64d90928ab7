//! Error taxonomy for the world model.
//!
//! Every core operation returns a `Result`; callers decide whether a
//! failure ends the run. No variant is ever raised after a partial
//! mutation: a failed operation leaves the grid exactly as it was.

use thiserror::Error;

use crate::world::types::{Direction, Position};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WorldError {
    /// Width or height of zero at construction. No grid is returned.
    #[error("grid dimensions {width}x{height} must be positive")]
    InvalidDimensions { width: usize, height: usize },

    /// Coordinate outside `[0, width) x [0, height)`.
    #[error("coordinates ({x}, {y}) are out of bounds")]
    OutOfBounds { x: usize, y: usize },

    /// Text that names none of the four directions.
    #[error("unknown direction: {0}")]
    UnknownDirection(String),

    /// Computed destination failed bounds validation.
    #[error("invalid move {direction} from {from}")]
    InvalidMove { from: Position, direction: Direction },
}

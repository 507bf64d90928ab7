//! Authoritative store of cell occupancy and bounds semantics.

use serde::{Deserialize, Serialize};

use crate::world::error::WorldError;
use crate::world::types::{Cell, Edge};

/// Fixed-size world grid.
///
/// Owns a dense row-major cell buffer indexed `y * width + x`. All access
/// goes through the bounds-checked accessors; the buffer itself never
/// leaks. The grid is created once and never resized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid with every cell set to background.
    pub fn new(width: usize, height: usize) -> Result<Self, WorldError> {
        if width == 0 || height == 0 {
            return Err(WorldError::InvalidDimensions { width, height });
        }
        Ok(Grid {
            width,
            height,
            cells: vec![Cell::Background; width * height],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Single source of truth for bounds: true iff `x < width` and
    /// `y < height`. Every other operation checks here before touching
    /// the buffer.
    pub fn is_valid_coordinate(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Content at a coordinate.
    pub fn get(&self, x: usize, y: usize) -> Result<Cell, WorldError> {
        if !self.is_valid_coordinate(x, y) {
            return Err(WorldError::OutOfBounds { x, y });
        }
        Ok(self.cells[self.index(x, y)])
    }

    /// Overwrite the cell at a coordinate.
    pub fn put(&mut self, x: usize, y: usize, cell: Cell) -> Result<(), WorldError> {
        if !self.is_valid_coordinate(x, y) {
            return Err(WorldError::OutOfBounds { x, y });
        }
        let index = self.index(x, y);
        self.cells[index] = cell;
        Ok(())
    }

    /// Boundary side of a valid coordinate.
    ///
    /// A corner satisfies more than one side; the fixed priority order is
    /// left, right, top, bottom, and the first match wins. Interior
    /// coordinates classify as `Edge::None`.
    pub fn classify_edge(&self, x: usize, y: usize) -> Result<Edge, WorldError> {
        if !self.is_valid_coordinate(x, y) {
            return Err(WorldError::OutOfBounds { x, y });
        }
        let edge = if x == 0 {
            Edge::Left
        } else if x == self.width - 1 {
            Edge::Right
        } else if y == 0 {
            Edge::Top
        } else if y == self.height - 1 {
            Edge::Bottom
        } else {
            Edge::None
        };
        Ok(edge)
    }

    /// Text snapshot of the grid: `height` lines of `width` symbols, row 0
    /// first, each line newline-terminated. Repeated calls with no
    /// intervening mutation yield identical strings.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in self.cells.chunks(self.width) {
            for cell in row {
                out.push(cell.symbol());
            }
            out.push('\n');
        }
        out
    }

    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }
}

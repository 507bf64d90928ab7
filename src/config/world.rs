/// World configuration constants.
///
/// This module defines the dimensions of the grid. The grid is created once
/// at startup with these dimensions and never resized.
pub const WORLD_WIDTH: usize = 10; // Number of columns in the world grid.

/// Number of rows in the world grid.
pub const WORLD_HEIGHT: usize = 10;

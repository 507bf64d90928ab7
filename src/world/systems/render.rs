//! Terminal rendering system.
//!
//! This module owns the screen clear and frame dump; the grid itself
//! produces the snapshot string.

use crate::world::grid::Grid;

/// Clear the terminal and print the current grid snapshot.
pub fn draw_frame(grid: &Grid) {
    // ANSI cursor home + clear screen.
    print!("\x1b[H\x1b[2J");
    print!("{}", grid.render());
}

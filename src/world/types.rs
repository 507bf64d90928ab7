use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::world::error::WorldError;

/// Symbol rendered for an empty cell.
pub const BACKGROUND_SYMBOL: char = '.';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four cardinal movement directions.
///
/// Row 0 is the top row of the rendered grid: `Up` decreases the row index
/// and `Down` increases it. The edge classifier uses the same convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Candidate position one step away from `pos`.
    ///
    /// Returns `None` when the step would leave the coordinate space
    /// entirely (below zero); the caller still has to check the candidate
    /// against the grid bounds.
    pub fn step_from(self, pos: Position) -> Option<Position> {
        match self {
            Direction::Up => pos.y.checked_sub(1).map(|y| Position { x: pos.x, y }),
            Direction::Down => pos.y.checked_add(1).map(|y| Position { x: pos.x, y }),
            Direction::Left => pos.x.checked_sub(1).map(|x| Position { x, y: pos.y }),
            Direction::Right => pos.x.checked_add(1).map(|x| Position { x, y: pos.y }),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

impl FromStr for Direction {
    type Err = WorldError;

    /// Accepts the one-letter forms (`U`, `D`, `L`, `R`) and the full
    /// words, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "u" | "up" => Ok(Direction::Up),
            "d" | "down" => Ok(Direction::Down),
            "l" | "left" => Ok(Direction::Left),
            "r" | "right" => Ok(Direction::Right),
            _ => Err(WorldError::UnknownDirection(s.to_string())),
        }
    }
}

/// Content of a single grid cell. Exactly one value per cell, no stacking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Background,
    Entity(char),
}

impl Cell {
    pub fn symbol(self) -> char {
        match self {
            Cell::Background => BACKGROUND_SYMBOL,
            Cell::Entity(symbol) => symbol,
        }
    }
}

/// Boundary side a coordinate sits on, recomputed from the grid bounds on
/// every query and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Edge {
    None,
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    /// Direction that walks further out past this edge.
    ///
    /// The driver excludes this direction when re-selecting after a
    /// boundary hit.
    pub fn outward_direction(self) -> Option<Direction> {
        match self {
            Edge::None => None,
            Edge::Top => Some(Direction::Up),
            Edge::Bottom => Some(Direction::Down),
            Edge::Left => Some(Direction::Left),
            Edge::Right => Some(Direction::Right),
        }
    }
}

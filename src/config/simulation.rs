use crate::world::types::Direction;

/// Simulation pacing constant.
///
/// This module defines the cadence of the tick loop and the defaults for
/// the moving entity.
pub const TICK_INTERVAL_MS: u64 = 50; // Delay between ticks in milliseconds.

/// Label of the moving entity, used in logs.
pub const ENTITY_NAME: &str = "Player One";

/// Symbol drawn for the moving entity.
pub const ENTITY_SYMBOL: char = '*';

/// Direction of the first tick when none is given on the command line.
pub const INITIAL_DIRECTION: Direction = Direction::Right;

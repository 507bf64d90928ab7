//! Tick loop driving the simulation.
//!
//! Each tick, strictly in order: classify the edge under the entity, pick a
//! replacement direction if the entity sits on a boundary, apply one move,
//! draw one frame, sleep. A failed move ends the run; the boundary check
//! makes that unreachable unless the steering is wrong.

use std::thread;
use std::time::Duration;

use log::{error, info};

use crate::config::simulation::{ENTITY_NAME, ENTITY_SYMBOL, TICK_INTERVAL_MS};
use crate::config::world::{WORLD_HEIGHT, WORLD_WIDTH};
use crate::world::entities::Entity;
use crate::world::error::WorldError;
use crate::world::grid::Grid;
use crate::world::systems::{draw_frame, move_entity, reselect_direction};
use crate::world::types::{Direction, Position};

/// Run the simulation until a move fails or the process is interrupted.
pub fn run_simulation(initial_direction: Direction) -> Result<(), WorldError> {
    let mut grid = Grid::new(WORLD_WIDTH, WORLD_HEIGHT)?;

    let start = Position {
        x: grid.width() / 2,
        y: grid.height() / 2,
    };
    let mut entity = Entity::new(ENTITY_NAME, ENTITY_SYMBOL, start);
    entity.place(&mut grid)?;

    info!(
        "{} starts at {} on a {}x{} grid, heading {}",
        entity.name,
        entity.pos,
        grid.width(),
        grid.height(),
        initial_direction
    );

    let mut rng = rand::rng();
    let mut direction = initial_direction;

    loop {
        // On a boundary cell, re-select a direction that does not walk
        // further past the detected edge.
        let edge = grid.classify_edge(entity.pos.x, entity.pos.y)?;
        if let Some(outward) = edge.outward_direction() {
            direction = reselect_direction(&mut rng, outward);
        }

        match move_entity(&mut grid, entity.pos, direction) {
            Ok(pos) => entity.pos = pos,
            Err(err) => {
                error!("{} stopped at {}: {}", entity.name, entity.pos, err);
                return Err(err);
            }
        }

        draw_frame(&grid);
        thread::sleep(Duration::from_millis(TICK_INTERVAL_MS));
    }
}

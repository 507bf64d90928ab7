//! Main entry point for the terminal simulation.
//!
//! Initializes the logger, resolves the starting direction (optional first
//! CLI argument, otherwise the configured default), and runs the tick loop
//! until a move fails or the process is interrupted.

use world::sim_loop::run_simulation;
use world::types::Direction;

pub mod config;
mod world;


fn main() {
    // Initialize logger from environment variable (default to info level).
    env_logger::init();

    // Optional starting direction, e.g. `flatland up` or `flatland R`.
    let direction = match std::env::args().nth(1) {
        Some(arg) => match arg.parse::<Direction>() {
            Ok(direction) => direction,
            Err(err) => {
                eprintln!("Error: {err}");
                return;
            }
        },
        None => config::simulation::INITIAL_DIRECTION,
    };

    if let Err(err) = run_simulation(direction) {
        eprintln!("Error: {err}");
    }

    println!("Movement finished.");
}

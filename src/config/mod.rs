/// Main configuration module.
///
/// Re-exports submodules for world and simulation configuration.
pub mod simulation;
pub mod world;

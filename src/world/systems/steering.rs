//! Direction selection policy.
//!
//! After a boundary hit the driver needs a fresh direction that does not
//! walk further past the detected edge. Randomness comes in through the
//! `Rng` parameter so the policy stays deterministic under test.

use log::debug;
use rand::Rng;

use crate::world::types::Direction;

/// Draw uniformly from the four directions until one differs from
/// `exclude`.
pub fn reselect_direction<R: Rng + ?Sized>(rng: &mut R, exclude: Direction) -> Direction {
    loop {
        let index = rng.random_range(0..Direction::ALL.len());
        let candidate = Direction::ALL[index];
        if candidate != exclude {
            debug!("reselected direction {candidate}, excluded {exclude}");
            return candidate;
        }
    }
}

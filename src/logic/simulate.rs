//! Simulated throws: a random point on the scoring area of the board.

use crate::models::{segment_at, Hit, CENTER, DOUBLE_OUTER_RADIUS};
use rand::Rng;
use std::f64::consts::TAU;

/// A random dart, uniform over the board's area inside the double ring.
///
/// Segments are hit in proportion to their area, so singles dominate and the
/// bullseye is rare.
pub fn random_hit<R: Rng + ?Sized>(rng: &mut R) -> Hit {
    loop {
        // sqrt keeps the density uniform per unit area rather than per radius.
        let r = DOUBLE_OUTER_RADIUS * rng.gen::<f64>().sqrt();
        let theta = rng.gen::<f64>() * TAU;
        // Float rounding on the outer edge can land just off the board; draw again.
        if let Some(hit) = segment_at(CENTER + r * theta.cos(), CENTER + r * theta.sin()) {
            return hit;
        }
    }
}

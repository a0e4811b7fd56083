//! 501 double-out rules for a single dart.

use crate::models::Hit;

/// What a dart does to the thrower's remaining score.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DartOutcome {
    /// Below zero, left on 1, or reached zero without a double.
    Bust,
    /// Reached exactly zero with a double.
    Checkout,
    /// Still in the leg with this many left.
    Scored { remaining: u32 },
}

/// Classify a dart thrown at `score` remaining.
pub fn score_dart(score: u32, hit: Hit) -> DartOutcome {
    let candidate = i64::from(score) - i64::from(hit.points());
    match candidate {
        c if c < 0 || c == 1 => DartOutcome::Bust,
        0 if hit.is_double() => DartOutcome::Checkout,
        0 => DartOutcome::Bust,
        c => DartOutcome::Scored { remaining: c as u32 },
    }
}

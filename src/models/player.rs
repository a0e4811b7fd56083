//! Player data structure.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (stable for the whole match).
pub type PlayerId = Uuid;

/// Score every player starts each leg on.
pub const STARTING_SCORE: u32 = 501;

/// A player in the match.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Remaining score in the current leg.
    pub score: u32,
    /// Legs won in the current set.
    pub legs_won: u32,
    pub sets_won: u32,
}

impl Player {
    /// Create a new player on 501 with no legs or sets.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            score: STARTING_SCORE,
            legs_won: 0,
            sets_won: 0,
        }
    }

    /// Record a won leg; returns the new legs-won count.
    pub fn add_leg(&mut self) -> u32 {
        self.legs_won += 1;
        self.legs_won
    }

    /// Record a won set; returns the new sets-won count.
    pub fn add_set(&mut self) -> u32 {
        self.sets_won += 1;
        self.sets_won
    }

    /// Back to 501 for a fresh leg.
    pub fn reset_score(&mut self) {
        self.score = STARTING_SCORE;
    }
}

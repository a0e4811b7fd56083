//! Match format chosen at setup.

use crate::models::match_state::MatchError;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

pub const PLAYER_COUNT_RANGE: RangeInclusive<usize> = 2..=4;
pub const LEGS_TO_WIN_SET_RANGE: RangeInclusive<u32> = 1..=5;
pub const SETS_TO_WIN_MATCH_RANGE: RangeInclusive<u32> = 1..=5;

fn default_legs_to_win_set() -> u32 {
    3
}

fn default_sets_to_win_match() -> u32 {
    2
}

/// Players and format of one match. Fixed once the match starts.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Names in throwing order. Blank names become "Player {n}".
    pub player_names: Vec<String>,
    #[serde(default = "default_legs_to_win_set")]
    pub legs_to_win_set: u32,
    #[serde(default = "default_sets_to_win_match")]
    pub sets_to_win_match: u32,
}

impl MatchConfig {
    pub fn new(player_names: Vec<String>, legs_to_win_set: u32, sets_to_win_match: u32) -> Self {
        Self {
            player_names,
            legs_to_win_set,
            sets_to_win_match,
        }
    }

    /// Check player count and format limits.
    pub fn validate(&self) -> Result<(), MatchError> {
        if !PLAYER_COUNT_RANGE.contains(&self.player_names.len()) {
            return Err(MatchError::WrongNumberOfPlayers(self.player_names.len()));
        }
        if !LEGS_TO_WIN_SET_RANGE.contains(&self.legs_to_win_set) {
            return Err(MatchError::LegsToWinSetOutOfRange(self.legs_to_win_set));
        }
        if !SETS_TO_WIN_MATCH_RANGE.contains(&self.sets_to_win_match) {
            return Err(MatchError::SetsToWinMatchOutOfRange(self.sets_to_win_match));
        }
        Ok(())
    }

    /// Display names with blanks replaced by "Player {n}" (1-based).
    pub fn display_names(&self) -> Vec<String> {
        self.player_names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let trimmed = name.trim();
                if trimmed.is_empty() {
                    format!("Player {}", i + 1)
                } else {
                    trimmed.to_string()
                }
            })
            .collect()
    }
}

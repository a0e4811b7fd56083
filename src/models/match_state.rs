//! MatchState and MatchPhase.

use crate::models::config::MatchConfig;
use crate::models::player::{Player, PlayerId};
use crate::models::segment::Hit;
use serde::{Deserialize, Serialize};

/// Errors that can occur while setting up or driving a match.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MatchError {
    /// Not a number on the board (1–20) or the bull (25).
    InvalidSegment { value: u8 },
    /// Multiplier outside 1–3, or a treble bull.
    InvalidMultiplier { value: u8, multiplier: u8 },
    /// A match needs 2 to 4 players.
    WrongNumberOfPlayers(usize),
    /// Legs per set must be 1–5.
    LegsToWinSetOutOfRange(u32),
    /// Sets per match must be 1–5.
    SetsToWinMatchOutOfRange(u32),
    /// Undo requested with no earlier snapshot.
    NothingToUndo,
    /// Writing the history export failed.
    Export(String),
}

impl std::fmt::Display for MatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchError::InvalidSegment { value } => write!(f, "{} is not a segment on the board", value),
            MatchError::InvalidMultiplier { value, multiplier } => {
                write!(f, "Multiplier {} is not possible on {}", multiplier, value)
            }
            MatchError::WrongNumberOfPlayers(n) => write!(f, "Need 2 to 4 players (got {})", n),
            MatchError::LegsToWinSetOutOfRange(n) => write!(f, "Legs to win a set must be 1 to 5 (got {})", n),
            MatchError::SetsToWinMatchOutOfRange(n) => {
                write!(f, "Sets to win the match must be 1 to 5 (got {})", n)
            }
            MatchError::NothingToUndo => write!(f, "Nothing to undo"),
            MatchError::Export(msg) => write!(f, "Export failed: {}", msg),
        }
    }
}

impl std::error::Error for MatchError {}

/// Coarse phase of the match, derived from the state fields.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPhase {
    /// No match started yet (setup form).
    #[default]
    Setup,
    /// Throws are accepted.
    InPlay,
    /// Someone checked out; waiting for "next leg".
    LegOver,
    /// Match has a winner.
    Completed,
}

/// Full scoring state of one match. Transitions in `logic` take `&MatchState` and return a new value.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    /// None until the match is started; `MatchState::default()` is the unstarted state.
    pub config: Option<MatchConfig>,
    /// Players in throwing order.
    pub players: Vec<Player>,
    pub current_player_index: usize,
    /// Who threw first in the current leg; rotates by one every leg.
    pub leg_starting_player_index: usize,
    /// Darts of the current visit (0–3).
    pub turn_throws: Vec<Hit>,
    pub match_winner: Option<PlayerId>,
    /// Transient message ("BUST!", "Leg to ...!"). Empty when there is nothing to show.
    pub message: String,
    /// Last dart thrown, for highlighting on the board.
    pub hit_marker: Option<Hit>,
    /// Every dart of the current leg, busts included.
    pub history: Vec<Hit>,
    pub is_leg_over: bool,
}

impl MatchState {
    pub fn is_started(&self) -> bool {
        self.config.is_some()
    }

    pub fn phase(&self) -> MatchPhase {
        if !self.is_started() {
            MatchPhase::Setup
        } else if self.match_winner.is_some() {
            MatchPhase::Completed
        } else if self.is_leg_over {
            MatchPhase::LegOver
        } else {
            MatchPhase::InPlay
        }
    }

    /// True when a throw would be scored.
    pub fn accepts_throws(&self) -> bool {
        self.phase() == MatchPhase::InPlay
    }

    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_player_index)
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn winner(&self) -> Option<&Player> {
        self.match_winner.and_then(|id| self.player(id))
    }

    /// Points scored so far in the current visit.
    pub fn turn_points(&self) -> u32 {
        self.turn_throws.iter().map(Hit::points).sum()
    }

    /// What the current player had before this visit; a bust restores it.
    pub fn turn_start_score(&self) -> Option<u32> {
        self.current_player().map(|p| p.score + self.turn_points())
    }

    pub(crate) fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.players.len().max(1)
    }
}

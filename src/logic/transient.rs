//! Transient display fields (hit highlight, short messages).

use crate::models::MatchState;
use std::time::Duration;

/// How long the renderer shows a hit highlight or "BUST!" before clearing it.
pub const TRANSIENT_CLEAR_DELAY: Duration = Duration::from_millis(500);

/// Drop the hit highlight, and the message unless it announces a finished leg or match.
pub fn clear_transient(state: &MatchState) -> MatchState {
    let mut next = state.clone();
    next.hit_marker = None;
    if !state.is_leg_over && state.match_winner.is_none() {
        next.message.clear();
    }
    next
}

//! Leg advancement after a checkout.

use crate::models::MatchState;

/// Start the next leg: everyone back on 501, leg-starter moves one seat on.
///
/// The starter rotates from the previous leg's starter, not from whoever won.
/// No-op unless the leg is over and the match has no winner.
pub fn start_next_leg(state: &MatchState) -> MatchState {
    if !state.is_leg_over || state.match_winner.is_some() || state.players.is_empty() {
        log::debug!("Ignoring next leg in phase {:?}", state.phase());
        return state.clone();
    }

    let mut next = state.clone();
    for p in &mut next.players {
        p.reset_score();
    }
    let starter = state.next_index(state.leg_starting_player_index);
    next.leg_starting_player_index = starter;
    next.current_player_index = starter;
    next.turn_throws.clear();
    next.message.clear();
    next.hit_marker = None;
    next.is_leg_over = false;
    next.history.clear();
    next
}

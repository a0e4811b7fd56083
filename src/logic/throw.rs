//! Folding a dart into the match: bust, checkout, leg/set/match completion, rotation.

use crate::logic::scoring::{score_dart, DartOutcome};
use crate::models::{Hit, MatchState};

/// Darts per visit.
pub const DARTS_PER_TURN: usize = 3;

pub const BUST_MESSAGE: &str = "BUST!";

/// Apply one dart for the current player and return the next state.
///
/// Returns the state unchanged when the match is not started, the leg is over,
/// or the match already has a winner.
///
/// - Bust: the whole visit is voided (score back to what it was before the visit),
///   message "BUST!", turn cleared, next player.
/// - Checkout: score 0, one more leg; a set and possibly the match may follow.
///   The leg stays over until [`start_next_leg`](crate::start_next_leg).
/// - Otherwise the new score is kept; after the third dart the next player is up.
pub fn apply_throw(state: &MatchState, hit: Hit) -> MatchState {
    if !state.accepts_throws() {
        log::debug!("Ignoring {} in phase {:?}", hit, state.phase());
        return state.clone();
    }
    let (legs_to_win_set, sets_to_win_match) = match &state.config {
        Some(c) => (c.legs_to_win_set, c.sets_to_win_match),
        None => return state.clone(),
    };
    let idx = state.current_player_index;
    let Some(current_score) = state.players.get(idx).map(|p| p.score) else {
        return state.clone();
    };

    let mut next = state.clone();
    next.hit_marker = Some(hit);
    next.history.push(hit);

    match score_dart(current_score, hit) {
        DartOutcome::Bust => {
            let restored = current_score + state.turn_points();
            next.players[idx].score = restored;
            next.turn_throws.clear();
            next.current_player_index = state.next_index(idx);
            next.message = BUST_MESSAGE.to_string();
        }
        DartOutcome::Checkout => {
            next.turn_throws.push(hit);
            next.is_leg_over = true;

            let winner = &mut next.players[idx];
            winner.score = 0;
            let name = winner.name.clone();
            let legs = winner.add_leg();
            next.message = format!("Leg to {}!", name);

            if legs >= legs_to_win_set {
                let sets = next.players[idx].add_set();
                for p in &mut next.players {
                    p.legs_won = 0;
                }
                next.message = format!("Set and Leg to {}!", name);

                if sets >= sets_to_win_match {
                    next.match_winner = Some(next.players[idx].id);
                    next.message = format!("Game Shot and The Match, {}!", name);
                }
            }
            log::info!("{}", next.message);
        }
        DartOutcome::Scored { remaining } => {
            next.players[idx].score = remaining;
            next.turn_throws.push(hit);
            next.message.clear();
            if next.turn_throws.len() >= DARTS_PER_TURN {
                next.turn_throws.clear();
                next.current_player_index = state.next_index(idx);
            }
        }
    }

    next
}

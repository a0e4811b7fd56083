//! Setup phase: start a match from its config, or go back to the unstarted state.

use crate::models::{MatchConfig, MatchError, MatchState, Player};

/// Start a match: one player per configured name, all on 501, first player to throw.
pub fn start_match(config: &MatchConfig) -> Result<MatchState, MatchError> {
    config.validate()?;
    let players: Vec<Player> = config.display_names().into_iter().map(Player::new).collect();
    log::info!(
        "Starting match: {} (first to {} sets, {} legs per set)",
        players.iter().map(|p| p.name.as_str()).collect::<Vec<_>>().join(" vs "),
        config.sets_to_win_match,
        config.legs_to_win_set
    );
    Ok(MatchState {
        config: Some(config.clone()),
        players,
        ..MatchState::default()
    })
}

/// Discard the match. The caller has to start a new one.
pub fn reset_match() -> MatchState {
    MatchState::default()
}

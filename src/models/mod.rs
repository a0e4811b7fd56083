//! Data structures for the darts scorer: board segments, players, match config and state.

mod config;
mod match_state;
mod player;
mod segment;

pub use config::{MatchConfig, LEGS_TO_WIN_SET_RANGE, PLAYER_COUNT_RANGE, SETS_TO_WIN_MATCH_RANGE};
pub use match_state::{MatchError, MatchPhase, MatchState};
pub use player::{Player, PlayerId, STARTING_SCORE};
pub use segment::{
    segment_at, BoardLayout, Hit, Multiplier, BULL, BULLSEYE_RADIUS, CENTER, DARTBOARD_NUMBERS,
    DOUBLE_INNER_RADIUS, DOUBLE_OUTER_RADIUS, NUMBER_RADIUS, OUTER_BULL_RADIUS, TREBLE_INNER_RADIUS,
    TREBLE_OUTER_RADIUS, VIEWBOX_SIZE,
};

//! 501 double-out darts scorer: library with board model, match state and scoring logic.

pub mod logic;
pub mod models;

pub use logic::{
    apply_throw, clear_transient, history_to_csv, random_hit, reset_match, score_dart, start_match,
    start_next_leg, DartOutcome, MatchSession, BUST_MESSAGE, DARTS_PER_TURN, MAX_UNDO_DEPTH,
    TRANSIENT_CLEAR_DELAY,
};
pub use models::{
    segment_at, BoardLayout, Hit, MatchConfig, MatchError, MatchPhase, MatchState, Multiplier, Player,
    PlayerId, STARTING_SCORE,
};

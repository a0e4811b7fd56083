//! Match logic: scoring rules, throws, legs, setup, undo session, simulation and export.

mod export;
mod leg;
mod scoring;
mod session;
mod setup;
mod simulate;
mod throw;
mod transient;

pub use export::history_to_csv;
pub use leg::start_next_leg;
pub use scoring::{score_dart, DartOutcome};
pub use session::{MatchSession, MAX_UNDO_DEPTH};
pub use setup::{reset_match, start_match};
pub use simulate::random_hit;
pub use throw::{apply_throw, BUST_MESSAGE, DARTS_PER_TURN};
pub use transient::{clear_transient, TRANSIENT_CLEAR_DELAY};

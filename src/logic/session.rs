//! A match plus its undo history.

use crate::logic::{apply_throw, clear_transient, reset_match, start_match, start_next_leg};
use crate::models::{Hit, MatchConfig, MatchError, MatchState};
use std::collections::VecDeque;

/// Snapshots kept for undo; the oldest is dropped beyond this.
pub const MAX_UNDO_DEPTH: usize = 256;

/// Owns the current [`MatchState`] and the snapshots before each scoring change.
///
/// Undo restores the previous snapshot exactly (scores, turn, leg counts, rotation).
/// "New match" is a separate operation and clears the undo history.
#[derive(Clone, Debug, Default)]
pub struct MatchSession {
    state: MatchState,
    undo_stack: VecDeque<MatchState>,
}

impl MatchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Start a fresh match from `config`. On error the session is left as it was.
    pub fn start_match(&mut self, config: &MatchConfig) -> Result<(), MatchError> {
        self.state = start_match(config)?;
        self.undo_stack.clear();
        Ok(())
    }

    /// Score a dart. Ignored darts (leg over, match won, not started) leave no undo entry.
    pub fn throw(&mut self, hit: Hit) {
        let next = apply_throw(&self.state, hit);
        self.advance(next);
    }

    pub fn start_next_leg(&mut self) {
        let next = start_next_leg(&self.state);
        self.advance(next);
    }

    /// Step back to the state before the last dart or leg change.
    pub fn undo(&mut self) -> Result<(), MatchError> {
        let previous = self.undo_stack.pop_back().ok_or(MatchError::NothingToUndo)?;
        self.state = clear_transient(&previous);
        Ok(())
    }

    /// Throw the match away and go back to setup.
    pub fn new_match(&mut self) {
        self.state = reset_match();
        self.undo_stack.clear();
    }

    pub fn clear_transient(&mut self) {
        self.state = clear_transient(&self.state);
    }

    fn advance(&mut self, next: MatchState) {
        if next == self.state {
            return;
        }
        let previous = std::mem::replace(&mut self.state, next);
        if self.undo_stack.len() == MAX_UNDO_DEPTH {
            self.undo_stack.pop_front();
        }
        self.undo_stack.push_back(previous);
    }
}

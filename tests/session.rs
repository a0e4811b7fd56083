//! Integration tests for the match session: undo and new match.

use darts_scorer_web::{Hit, MatchConfig, MatchError, MatchPhase, MatchSession};

fn started_session() -> MatchSession {
    let mut session = MatchSession::new();
    session
        .start_match(&MatchConfig::new(vec!["Alice".into(), "Bob".into()], 1, 2))
        .unwrap();
    session
}

#[test]
fn undo_with_nothing_to_undo_fails() {
    let mut session = started_session();
    assert_eq!(session.undo(), Err(MatchError::NothingToUndo));
    assert!(!session.can_undo());
}

#[test]
fn undo_restores_previous_dart() {
    let mut session = started_session();
    session.throw(Hit::treble(20).unwrap());
    session.throw(Hit::single(1).unwrap());
    assert_eq!(session.state().players[0].score, 440);

    session.undo().unwrap();
    let s = session.state();
    assert_eq!(s.players[0].score, 441);
    assert_eq!(s.turn_throws, vec![Hit::treble(20).unwrap()]);
    assert!(s.hit_marker.is_none());
    assert_eq!(session.undo_depth(), 1);
}

#[test]
fn undo_across_turn_end_restores_thrower() {
    let mut session = started_session();
    for _ in 0..3 {
        session.throw(Hit::treble(20).unwrap());
    }
    assert_eq!(session.state().current_player_index, 1);
    session.undo().unwrap();
    assert_eq!(session.state().current_player_index, 0);
    assert_eq!(session.state().turn_throws.len(), 2);
}

#[test]
fn undo_reverts_a_checkout() {
    let mut session = started_session();
    // 501 = 9-darter: T20 T20 T20 | T20 T20 T20 | T20 T19 D12, Bob throws singles in between
    let t20 = Hit::treble(20).unwrap();
    let one = Hit::single(1).unwrap();
    for hit in [t20, t20, t20, one, one, one, t20, t20, t20, one, one, one, t20, Hit::treble(19).unwrap()] {
        session.throw(hit);
    }
    assert_eq!(session.state().players[0].score, 24);
    session.throw(Hit::double(12).unwrap());
    assert_eq!(session.state().phase(), MatchPhase::LegOver);
    assert_eq!(session.state().players[0].sets_won, 1);

    session.undo().unwrap();
    let s = session.state();
    assert_eq!(s.phase(), MatchPhase::InPlay);
    assert_eq!(s.players[0].score, 24);
    assert_eq!(s.players[0].sets_won, 0);
    assert!(s.message.is_empty());
}

#[test]
fn ignored_actions_leave_no_undo_entry() {
    let mut session = started_session();
    session.start_next_leg(); // leg not over
    session.clear_transient();
    assert!(!session.can_undo());

    let mut unstarted = MatchSession::new();
    unstarted.throw(Hit::treble(20).unwrap());
    assert!(!unstarted.can_undo());
    assert_eq!(unstarted.state().phase(), MatchPhase::Setup);
}

#[test]
fn new_match_clears_state_and_undo() {
    let mut session = started_session();
    session.throw(Hit::treble(20).unwrap());
    session.new_match();
    assert_eq!(session.state().phase(), MatchPhase::Setup);
    assert!(!session.can_undo());
}

#[test]
fn failed_start_leaves_session_untouched() {
    let mut session = started_session();
    session.throw(Hit::treble(20).unwrap());
    let before = session.state().clone();
    let bad = MatchConfig::new(vec!["Solo".into()], 1, 1);
    assert_eq!(session.start_match(&bad), Err(MatchError::WrongNumberOfPlayers(1)));
    assert_eq!(session.state(), &before);
    assert!(session.can_undo());
}

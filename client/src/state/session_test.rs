use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn session_starts_idle() {
    let state = SessionState::default();
    assert_eq!(state.phase, SessionPhase::Idle);
    assert!(!state.is_active());
}

#[test]
fn phase_default_is_idle() {
    assert_eq!(SessionPhase::default(), SessionPhase::Idle);
}

#[test]
fn phases_are_distinct() {
    assert_ne!(SessionPhase::Idle, SessionPhase::Active);
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn start_activates_the_session() {
    let mut state = SessionState::default();
    state.start();
    assert!(state.is_active());
}

#[test]
fn start_twice_keeps_a_single_active_session() {
    let mut state = SessionState::default();
    state.start();
    state.start();
    assert_eq!(state.phase, SessionPhase::Active);
}

#[test]
fn dismiss_deactivates_the_session() {
    let mut state = SessionState::default();
    state.start();
    state.dismiss();
    assert!(!state.is_active());
}

#[test]
fn dismiss_when_idle_is_a_noop() {
    let mut state = SessionState::default();
    state.dismiss();
    assert_eq!(state.phase, SessionPhase::Idle);
    state.dismiss();
    assert_eq!(state.phase, SessionPhase::Idle);
}

#[test]
fn overlay_tracks_any_click_dismiss_sequence() {
    // start/dismiss in any order always lands on a well-defined phase:
    // the overlay is mounted iff the last transition was a start.
    let mut state = SessionState::default();
    let script: &[(fn(&mut SessionState), bool)] = &[
        (SessionState::start, true),
        (SessionState::start, true),
        (SessionState::dismiss, false),
        (SessionState::dismiss, false),
        (SessionState::start, true),
        (SessionState::dismiss, false),
    ];
    for (step, expect_active) in script {
        step(&mut state);
        assert_eq!(state.is_active(), *expect_active);
    }
}

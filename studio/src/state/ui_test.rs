use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn both_panels_start_expanded() {
    let state = UiState::default();
    assert!(state.left_panel_expanded);
    assert!(state.right_panel_expanded);
}

#[test]
fn no_notice_at_startup() {
    let state = UiState::default();
    assert_eq!(state.notice, None);
    assert_eq!(state.notice_seq, 0);
}

// =============================================================
// Notice lifecycle
// =============================================================

#[test]
fn show_notice_sets_text_and_bumps_seq() {
    let mut state = UiState::default();
    let seq = state.show_notice("<Row></Row>");
    assert_eq!(state.notice.as_deref(), Some("<Row></Row>"));
    assert_eq!(seq, 1);
}

#[test]
fn clear_notice_with_matching_seq_clears() {
    let mut state = UiState::default();
    let seq = state.show_notice("first");
    state.clear_notice(seq);
    assert_eq!(state.notice, None);
}

#[test]
fn stale_dismissal_leaves_a_newer_notice() {
    let mut state = UiState::default();
    let first = state.show_notice("first");
    let _second = state.show_notice("second");
    state.clear_notice(first);
    assert_eq!(state.notice.as_deref(), Some("second"));
}

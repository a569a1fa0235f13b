use super::*;

// =============================================================
// Open / close
// =============================================================

#[test]
fn default_has_no_modal() {
    let state = ModalState::default();
    assert!(state.active.is_none());
    assert_eq!(state.display(ModalKind::Login), "none");
    assert_eq!(state.class(ModalKind::Login), "modal");
}

#[test]
fn open_sets_display_and_active_class() {
    let mut state = ModalState::default();
    state.open(ModalKind::Login);
    assert_eq!(state.display(ModalKind::Login), "flex");
    assert_eq!(state.class(ModalKind::Login), "modal active");
}

#[test]
fn open_leaves_exactly_one_visible() {
    let mut state = ModalState::default();
    state.open(ModalKind::Login);
    state.open(ModalKind::Profile);
    let visible = [ModalKind::Login, ModalKind::Profile, ModalKind::Training]
        .into_iter()
        .filter(|k| state.is_open(*k))
        .count();
    assert_eq!(visible, 1);
    assert!(state.is_open(ModalKind::Profile));
}

#[test]
fn close_reverses_both_toggles() {
    let mut state = ModalState::default();
    state.open(ModalKind::Training);
    assert!(state.close(ModalKind::Training));
    assert_eq!(state.display(ModalKind::Training), "none");
    assert_eq!(state.class(ModalKind::Training), "modal");
}

#[test]
fn close_of_other_modal_is_noop() {
    let mut state = ModalState::default();
    state.open(ModalKind::Profile);
    assert!(!state.close(ModalKind::Login));
    assert!(state.is_open(ModalKind::Profile));
}

// =============================================================
// Click / key handling
// =============================================================

#[test]
fn backdrop_click_closes() {
    let mut state = ModalState::default();
    state.open(ModalKind::Login);
    assert!(state.handle_click(ModalKind::Login, ModalClick::Backdrop));
    assert!(!state.is_open(ModalKind::Login));
}

#[test]
fn content_click_does_not_close() {
    let mut state = ModalState::default();
    state.open(ModalKind::Login);
    assert!(!state.handle_click(ModalKind::Login, ModalClick::Content));
    assert!(state.is_open(ModalKind::Login));
}

#[test]
fn escape_closes_other_keys_do_not() {
    let mut state = ModalState::default();
    state.open(ModalKind::Profile);
    assert!(!state.handle_key(ModalKind::Profile, "Enter"));
    assert!(state.is_open(ModalKind::Profile));
    assert!(state.handle_key(ModalKind::Profile, "Escape"));
    assert!(!state.is_open(ModalKind::Profile));
}

#[test]
fn dom_ids_are_distinct() {
    assert_ne!(ModalKind::Login.dom_id(), ModalKind::Profile.dom_id());
    assert_ne!(ModalKind::Profile.dom_id(), ModalKind::Training.dom_id());
}

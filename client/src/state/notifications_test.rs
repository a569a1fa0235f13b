use super::*;
use crate::consts::UiTimings;

// =============================================================
// NoticeKind
// =============================================================

#[test]
fn notice_kind_classes() {
    assert_eq!(NoticeKind::Info.css_class(), "notification notification-info");
    assert_eq!(NoticeKind::Success.css_class(), "notification notification-success");
    assert_eq!(NoticeKind::Error.css_class(), "notification notification-error");
}

#[test]
fn notice_constructors_set_kind() {
    assert_eq!(Notice::info("a").kind, NoticeKind::Info);
    assert_eq!(Notice::success("b").kind, NoticeKind::Success);
    assert_eq!(Notice::error("c").kind, NoticeKind::Error);
}

// =============================================================
// Stack lifecycle
// =============================================================

#[test]
fn push_stacks_in_arrival_order() {
    let mut state = NotificationsState::default();
    let a = state.push(Notice::info("first"), 0.0);
    let b = state.push(Notice::error("second"), 10.0);
    assert!(a < b);
    let messages: Vec<_> = state.items.iter().map(|n| n.message.as_str()).collect();
    assert_eq!(messages, ["first", "second"]);
}

#[test]
fn dismiss_marks_leaving_before_removal() {
    let mut state = NotificationsState::default();
    let id = state.push(Notice::success("saved"), 0.0);
    assert!(state.begin_dismiss(id));
    assert_eq!(state.items.len(), 1);
    assert!(state.items[0].class().contains("notification--leaving"));
    assert!(state.remove(id));
    assert!(state.items.is_empty());
}

#[test]
fn second_dismiss_is_noop() {
    let mut state = NotificationsState::default();
    let id = state.push(Notice::info("x"), 0.0);
    assert!(state.begin_dismiss(id));
    assert!(!state.begin_dismiss(id));
}

#[test]
fn auto_timer_after_manual_close_is_noop() {
    let mut state = NotificationsState::default();
    let id = state.push(Notice::info("x"), 0.0);
    // Close button at 1s, removal after the exit animation.
    state.begin_dismiss(id);
    state.remove(id);
    // Auto-dismiss timer fires at 5s and finds nothing.
    assert!(!state.begin_dismiss(id));
    assert!(!state.remove(id));
    assert!(state.items.is_empty());
}

#[test]
fn dismissing_one_leaves_others_untouched() {
    let mut state = NotificationsState::default();
    let a = state.push(Notice::info("a"), 0.0);
    let b = state.push(Notice::info("b"), 0.0);
    state.begin_dismiss(a);
    state.remove(a);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, b);
    assert!(!state.items[0].leaving);
}

#[test]
fn undismissed_notification_gone_within_lifetime() {
    let timings = UiTimings::default();
    let mut state = NotificationsState::default();
    let created = 1_000.0;
    let id = state.push(Notice::info("timed"), created);

    // Auto-dismiss fires, then removal after the exit animation.
    let dismiss_at = created + f64::from(timings.notification_ms);
    assert!(state.begin_dismiss(id));
    let removed_at = dismiss_at + f64::from(timings.exit_animation_ms);
    assert!(state.remove(id));
    assert!(removed_at - created <= 5_300.0);
}

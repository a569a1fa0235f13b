//! Notification emitter: pushes toasts and runs their dismissal timers.
//!
//! Timers are fire-and-forget. Each one goes through the guarded
//! transitions on [`NotificationsState`], so a timer whose notification was
//! already closed, or whose page is gone, does nothing.

use leptos::prelude::*;

use crate::consts::NOTIFICATION_STYLE_ID;
#[cfg(feature = "hydrate")]
use crate::consts::UiTimings;
use crate::state::notifications::{Notice, NotificationsState};
use crate::util::clock::now_ms;
use crate::util::styles::{NOTIFICATION_CSS, ensure_style};

/// Show `notice` and schedule its auto-dismissal.
pub fn notify(notifications: RwSignal<NotificationsState>, notice: Notice) {
    ensure_style(NOTIFICATION_STYLE_ID, NOTIFICATION_CSS);
    let now = now_ms();
    let Some(id) = notifications.try_update(|s| s.push(notice, now)) else {
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(UiTimings::default().notification_ms).await;
        dismiss(notifications, id);
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

/// Start the exit animation for `id`, detaching it once the animation ends.
pub fn dismiss(notifications: RwSignal<NotificationsState>, id: u64) {
    let started = notifications.try_update(|s| s.begin_dismiss(id)).unwrap_or(false);
    if !started {
        return;
    }

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(UiTimings::default().exit_animation_ms).await;
        if notifications.try_update(|s| s.remove(id)).is_none() {
            log::debug!("notification #{id} outlived its page");
        }
    });
    #[cfg(not(feature = "hydrate"))]
    notifications.update(|s| {
        s.remove(id);
    });
}

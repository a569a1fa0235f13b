//! Toast notifications in the top-right corner.

use leptos::prelude::*;

use crate::state::notifications::NotificationsState;
use crate::util::notify::dismiss;

/// Renders every live notification, oldest on top.
#[component]
pub fn NotificationStack() -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationsState>>();

    view! {
        <div class="notification-stack">
            {move || {
                notifications
                    .get()
                    .items
                    .into_iter()
                    .map(|n| {
                        let id = n.id;
                        let class = n.class();
                        view! {
                            <div class=class>
                                <div class="notification-content">
                                    <span class="notification-message">{n.message}</span>
                                    <button
                                        class="notification-close"
                                        title="Dismiss"
                                        on:click=move |_| dismiss(notifications, id)
                                    >
                                        "×"
                                    </button>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

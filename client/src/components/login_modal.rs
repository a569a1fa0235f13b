//! Landing-page login form.

use leptos::prelude::*;

use crate::components::modal_frame::ModalFrame;
use crate::net::api;
use crate::state::landing::{LandingState, ROLES};
use crate::state::modal::ModalKind;
use crate::util::effects::PageSignals;

/// Email + role login modal.
#[component]
pub fn LoginModal() -> impl IntoView {
    let landing = expect_context::<RwSignal<LandingState>>();
    let page = PageSignals::from_context();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(request) = landing.try_update(LandingState::begin_login) else {
            return;
        };
        match request {
            Ok(request) => {
                leptos::task::spawn_local(async move {
                    let result = api::login(&request).await;
                    if let Some(effects) = landing.try_update(|s| s.finish_login(result)) {
                        page.apply(effects);
                    }
                });
            }
            Err(effects) => page.apply(effects),
        }
    };

    view! {
        <ModalFrame kind=ModalKind::Login title="Join the Adventure">
            <form id="loginForm" class="auth-form" on:submit=on_submit>
                <div class="form-group">
                    <label for="email">"Email"</label>
                    <input
                        id="email"
                        type="email"
                        placeholder="hero@example.com"
                        prop:value=move || landing.get().email
                        on:input=move |ev| landing.update(|s| s.email = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="role">"Role"</label>
                    <select
                        id="role"
                        prop:value=move || landing.get().role
                        on:change=move |ev| landing.update(|s| s.role = event_target_value(&ev))
                    >
                        <option value="">"Choose your class"</option>
                        {ROLES
                            .iter()
                            .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                            .collect_view()}
                    </select>
                </div>
                <button class="btn btn-primary btn-full" type="submit" disabled=move || landing.get().pending>
                    "Start Quest"
                </button>
            </form>
        </ModalFrame>
    }
}

//! Profile setup form shown after a successful login.

use leptos::prelude::*;

use crate::components::modal_frame::ModalFrame;
use crate::net::api;
use crate::state::landing::{LandingState, PROFILE_FIELDS};
use crate::state::modal::ModalKind;
use crate::util::effects::PageSignals;

#[component]
pub fn ProfileModal() -> impl IntoView {
    let landing = expect_context::<RwSignal<LandingState>>();
    let page = PageSignals::from_context();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(Some(profile)) = landing.try_update(LandingState::begin_profile) else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = api::submit_profile(&profile).await;
            if let Some(effects) = landing.try_update(|s| s.finish_profile(result)) {
                page.apply(effects);
            }
        });
    };

    view! {
        <ModalFrame kind=ModalKind::Profile title="Create Your Character">
            <form id="profileForm" class="auth-form" on:submit=on_submit>
                {PROFILE_FIELDS
                    .iter()
                    .map(|&(name, label)| {
                        let value = move || landing.get().profile.get(name).cloned().unwrap_or_default();
                        let on_input = move |ev: leptos::ev::Event| landing.update(|s| s.set_profile_field(name, event_target_value(&ev)));
                        view! {
                            <div class="form-group">
                                <label for=name>{label}</label>
                                <input id=name name=name type="text" prop:value=value on:input=on_input />
                            </div>
                        }
                    })
                    .collect_view()}
                <button class="btn btn-primary btn-full" type="submit" disabled=move || landing.get().pending>
                    "Begin Adventure"
                </button>
            </form>
        </ModalFrame>
    }
}

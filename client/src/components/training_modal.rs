//! Communication-training dialog for the active scenario.

use leptos::prelude::*;

use crate::components::modal_frame::ModalFrame;
use crate::net::api;
use crate::state::modal::ModalKind;
use crate::state::training::TrainingState;
use crate::util::effects::PageSignals;

/// Shows the coach prompt and collects the player's reply.
#[component]
pub fn TrainingModal() -> impl IntoView {
    let page = PageSignals::from_context();
    let training = page.training;

    let title = move || training.get().session().map(|s| s.title.clone()).unwrap_or_default();
    let prompt = move || training.get().session().map(|s| s.prompt.clone()).unwrap_or_default();

    let end_training = move || {
        if let Some(effects) = training.try_update(TrainingState::cancel) {
            page.apply(effects);
        }
    };

    let on_submit = move |_| {
        let draft = training.get_untracked().response_draft;
        match training.try_update(|t| t.begin_submit(&draft)) {
            Some(Ok(Some(request))) => {
                leptos::task::spawn_local(async move {
                    let result = api::respond_to_scenario(&request).await;
                    if let Some(effects) = training.try_update(|t| t.finish_submit(result)) {
                        page.apply(effects);
                    }
                });
            }
            Some(Err(effects)) => page.apply(effects),
            Some(Ok(None)) | None => {}
        }
    };

    view! {
        <ModalFrame
            kind=ModalKind::Training
            title=title
            on_close=Callback::new(move |()| end_training())
        >
            <div class="scenario-intro">
                <p>{prompt}</p>
            </div>
            <div class="scenario-response">
                <textarea
                    id="scenarioResponse"
                    rows="4"
                    placeholder="Type your response..."
                    prop:value=move || training.get().response_draft
                    on:input=move |ev| training.update(|t| t.response_draft = event_target_value(&ev))
                ></textarea>
            </div>
            <div class="scenario-actions">
                <button class="btn btn-primary" on:click=on_submit disabled=move || training.get().is_pending()>
                    "Submit Response"
                </button>
                <button class="btn btn-outline" on:click=move |_| end_training()>
                    "End Training"
                </button>
            </div>
        </ModalFrame>
    }
}

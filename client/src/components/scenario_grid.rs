//! Communication-training scenario cards.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::Scenario;
use crate::state::training::TrainingState;
use crate::util::effects::PageSignals;

/// Grid of scenario cards; "Start Training" opens the training dialog.
#[component]
pub fn ScenarioGrid() -> impl IntoView {
    let page = PageSignals::from_context();
    let listings = page.listings;

    view! {
        <div class="training-grid" id="scenariosGrid">
            {move || {
                listings
                    .get()
                    .scenarios
                    .into_iter()
                    .map(|scenario| scenario_card(scenario, page))
                    .collect_view()
            }}
        </div>
    }
}

fn scenario_card(scenario: Scenario, page: PageSignals) -> impl IntoView {
    let difficulty = scenario.difficulty.as_str();
    let scenario_id = scenario.id;
    let on_start = move |_| start_scenario(scenario_id.clone(), page);

    view! {
        <div class="training-card" data-difficulty=difficulty>
            <div class="card-header">
                <h3>{scenario.title}</h3>
                <div class=format!("difficulty-badge difficulty-{difficulty}")>{difficulty}</div>
            </div>
            <div class="card-content">
                <p>{scenario.description}</p>
                <div class="scenario-rewards">
                    <span class="xp-reward">{format!("+{} XP", scenario.xp_reward)}</span>
                </div>
            </div>
            <div class="card-footer">
                <button class="btn btn-primary btn-full" on:click=on_start disabled=move || page.training.get().is_pending()>
                    "Start Training"
                </button>
            </div>
        </div>
    }
}

fn start_scenario(scenario_id: String, page: PageSignals) {
    let training = page.training;
    let Some(Some(request)) = training.try_update(|t| t.begin_start(&scenario_id)) else {
        return;
    };
    leptos::task::spawn_local(async move {
        let result = api::start_scenario(&request).await;
        if let Some(effects) = training.try_update(|t: &mut TrainingState| t.finish_start(&scenario_id, result)) {
            page.apply(effects);
        }
    });
}

//! Dashboard page: sidebar navigation and the tabbed content panels.
//!
//! SYSTEM CONTEXT
//! ==============
//! The scenario list is requested once on mount and falls back to the
//! built-in set when the request fails or returns nothing. Internships start
//! from the built-in set and are replaced by chat recommendations.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::chat_panel::ChatPanel;
use crate::components::internship_grid::InternshipGrid;
use crate::components::notification_stack::NotificationStack;
use crate::components::reward_overlay::RewardOverlay;
use crate::components::scenario_grid::ScenarioGrid;
use crate::components::sidebar_nav::{QuickActions, SidebarNav};
use crate::components::training_modal::TrainingModal;
use crate::components::xp_bar::XpBar;
use crate::net::api;
use crate::state::listings::{ListingsState, resolve_scenarios};
use crate::state::nav::{DashboardSection, NavState};
use crate::state::player::PlayerStats;

/// Daily quests shown on the quests panel: `(title, xp)`.
const QUESTS: &[(&str, u32)] = &[
    ("Complete your profile", 25),
    ("Ask the AI coach a question", 10),
    ("Finish a communication training", 30),
    ("Apply to an internship", 50),
];

#[component]
pub fn DashboardPage() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();
    let listings = expect_context::<RwSignal<ListingsState>>();
    let player = expect_context::<RwSignal<PlayerStats>>();

    // Browser-only: effects do not run during SSR.
    Effect::new(move || {
        leptos::task::spawn_local(async move {
            let (scenarios, source) = resolve_scenarios(api::fetch_scenarios().await);
            log::info!("loaded {} scenarios ({source:?})", scenarios.len());
            listings.try_update(|l| l.replace_scenarios(scenarios, source));
        });
    });

    let panel = move |section: DashboardSection, body: AnyView| {
        view! {
            <section id=section.section_id() class=move || nav.get().section_class(section)>
                <h2 class="section-title">{section_title(section)}</h2>
                {body}
            </section>
        }
    };

    view! {
        <div class="dashboard">
            <header class="dashboard-header">
                <div class="logo pixel-font">"MENTORA"</div>
                <XpBar/>
            </header>
            <div class="dashboard-body">
                <SidebarNav/>
                <main class="dashboard-content">
                    {panel(
                        DashboardSection::Overview,
                        view! {
                            <p class="welcome">{move || format!("Welcome back, {}!", player.get().name)}</p>
                            <QuickActions/>
                        }
                            .into_any(),
                    )}
                    {panel(
                        DashboardSection::Quests,
                        view! {
                            <ul class="quest-list">
                                {QUESTS
                                    .iter()
                                    .map(|&(title, xp)| {
                                        view! {
                                            <li class="quest-item">
                                                <span class="quest-title">{title}</span>
                                                <span class="xp-reward">{format!("+{xp} XP")}</span>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        }
                            .into_any(),
                    )}
                    {panel(DashboardSection::Internships, view! { <InternshipGrid/> }.into_any())}
                    {panel(DashboardSection::AiCoach, view! { <ChatPanel/> }.into_any())}
                    {panel(DashboardSection::Training, view! { <ScenarioGrid/> }.into_any())}
                    {panel(
                        DashboardSection::Profile,
                        view! {
                            <div class="profile-card">
                                <p>{move || player.get().name}</p>
                                <p>{move || player.get().role}</p>
                                <p>{move || format!("Level {}", player.get().level)}</p>
                            </div>
                        }
                            .into_any(),
                    )}
                </main>
            </div>
            <TrainingModal/>
            <RewardOverlay/>
            <NotificationStack/>
        </div>
    }
}

/// Heading shown at the top of each panel.
fn section_title(section: DashboardSection) -> &'static str {
    match section {
        DashboardSection::Overview => "Your Adventure",
        DashboardSection::Quests => "Daily Quests",
        DashboardSection::Internships => "Internship Quest Board",
        DashboardSection::AiCoach => "AI Career Coach",
        DashboardSection::Training => "Communication Training",
        DashboardSection::Profile => "Character Sheet",
    }
}

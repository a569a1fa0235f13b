//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{dashboard::DashboardPage, landing::LandingPage};
use crate::state::{
    chat::ChatState, landing::LandingState, listings::ListingsState, modal::ModalState, nav::NavState,
    notifications::NotificationsState, player::PlayerStats, reward::RewardState, training::TrainingState,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(RwSignal::new(NotificationsState::default()));
    provide_context(RwSignal::new(ModalState::default()));
    provide_context(RwSignal::new(RewardState::default()));
    provide_context(RwSignal::new(TrainingState::default()));
    provide_context(RwSignal::new(ListingsState::default()));
    provide_context(RwSignal::new(NavState::default()));
    provide_context(RwSignal::new(ChatState::default()));
    provide_context(RwSignal::new(LandingState::default()));
    provide_context(RwSignal::new(PlayerStats::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/mentora.css"/>
        <Title text="MENTORA"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
            </Routes>
        </Router>
    }
}

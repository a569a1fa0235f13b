//! Landing page: hero banner, feature highlights and the login flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both entry buttons open the login modal. A successful login swaps to the
//! profile modal; a saved profile plays the level-up banner and redirects to
//! the dashboard (see `state::landing`).

use leptos::prelude::*;

use crate::components::login_modal::LoginModal;
use crate::components::notification_stack::NotificationStack;
use crate::components::profile_modal::ProfileModal;
use crate::components::reward_overlay::RewardOverlay;
use crate::state::modal::{ModalKind, ModalState};

const FEATURES: &[(&str, &str, &str)] = &[
    ("🎯", "Smart Matching", "Internships ranked against your skills and goals."),
    ("🤖", "AI Career Coach", "Ask anything about careers, skills and applications."),
    ("💬", "Communication Training", "Practice interviews and negotiations, earn XP."),
];

#[component]
pub fn LandingPage() -> impl IntoView {
    let modal = expect_context::<RwSignal<ModalState>>();
    let open_login = move |_| modal.update(|m| m.open(ModalKind::Login));

    view! {
        <div class="landing">
            <header class="landing-header">
                <div class="logo pixel-font">"MENTORA"</div>
                <button id="loginBtn" class="btn btn-outline" on:click=open_login>
                    "Login"
                </button>
            </header>

            <section class="hero">
                <h1 class="pixel-font">"Level Up Your Career"</h1>
                <p class="hero-subtitle">
                    "Find internships, train your communication skills and grow with an AI mentor."
                </p>
                <button id="startQuestBtn" class="btn btn-primary btn-large" on:click=open_login>
                    "Start Your Quest"
                </button>
            </section>

            <section class="features">
                {FEATURES
                    .iter()
                    .map(|&(icon, title, text)| {
                        view! {
                            <div class="feature-card">
                                <div class="feature-icon">{icon}</div>
                                <h3>{title}</h3>
                                <p>{text}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>

            <LoginModal/>
            <ProfileModal/>
            <RewardOverlay/>
            <NotificationStack/>
        </div>
    }
}

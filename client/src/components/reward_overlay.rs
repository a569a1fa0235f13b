//! Full-screen level-up / training-complete banner.

use leptos::prelude::*;

use crate::state::reward::RewardState;

const PARTICLES: usize = 5;

#[component]
pub fn RewardOverlay() -> impl IntoView {
    let reward = expect_context::<RwSignal<RewardState>>();

    move || {
        reward.get().banner.map(|banner| {
            let xp = banner.xp_label();
            view! {
                <div class="level-up-animation">
                    <div class="level-up-content">
                        <h2 class="pixel-font">{banner.headline}</h2>
                        <div class="level-up-details">
                            {banner.level.map(|level| view! { <span class="new-level">{format!("Level {level}")}</span> })}
                            <span class="xp-gained">{xp}</span>
                        </div>
                        <div class="level-up-particles">
                            {(0..PARTICLES).map(|_| view! { <div class="particle"></div> }).collect_view()}
                        </div>
                    </div>
                </div>
            }
        })
    }
}

//! Player level and XP progress bar.

use leptos::prelude::*;

use crate::state::player::PlayerStats;

#[component]
pub fn XpBar() -> impl IntoView {
    let player = expect_context::<RwSignal<PlayerStats>>();

    view! {
        <div class="player-stats">
            <div class="player-info">
                <span class="player-name">{move || player.get().name}</span>
                <span class="player-role">{move || player.get().role}</span>
            </div>
            <div class="level-display">
                <span class="level-label">{move || format!("Level {}", player.get().level)}</span>
                <div class="xp-bar">
                    <div class="xp-fill" style=move || player.get().xp_bar_style()></div>
                </div>
                <span class="xp-text">
                    {move || {
                        let stats = player.get();
                        format!("{} / {} XP", stats.current_xp, stats.next_level_xp)
                    }}
                </span>
            </div>
        </div>
    }
}

//! Dashboard sidebar and quick-action buttons.

use leptos::prelude::*;

use crate::state::actions::QuickAction;
use crate::state::nav::{DashboardSection, NavState};
use crate::util::effects::PageSignals;

/// Sidebar listing every dashboard section; exactly one is highlighted.
#[component]
pub fn SidebarNav() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();

    view! {
        <nav class="sidebar">
            <ul class="nav-list">
                {DashboardSection::ALL
                    .into_iter()
                    .map(|section| {
                        view! {
                            <li
                                class=move || nav.get().item_class(section)
                                data-section=section.key()
                                on:click=move |_| nav.update(|n| n.select(section))
                            >
                                <span class="nav-label">{section.label()}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}

/// Overview shortcut buttons.
#[component]
pub fn QuickActions() -> impl IntoView {
    let page = PageSignals::from_context();

    view! {
        <div class="quick-actions">
            {QuickAction::ALL
                .into_iter()
                .map(|action| {
                    view! {
                        <button class="btn btn-outline quick-action" on:click=move |_| page.apply(action.effects())>
                            {action.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

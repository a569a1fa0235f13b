//! Applies [`Effect`] values returned by state transitions to live signals.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages build one [`PageSignals`] from context and route every transition's
//! effects through [`PageSignals::apply`]. Browser-only effects (focus,
//! navigation, timers) compile to logging no-ops without `hydrate`.

use leptos::prelude::*;

use crate::state::effect::Effect;
use crate::state::listings::{ListingSource, ListingsState};
use crate::state::modal::ModalState;
use crate::state::nav::NavState;
use crate::state::notifications::NotificationsState;
use crate::state::reward::{RewardBanner, RewardState};
use crate::state::training::TrainingState;
use crate::util::notify::notify;

/// Handles to every signal an effect can touch.
#[derive(Clone, Copy)]
pub struct PageSignals {
    pub notifications: RwSignal<NotificationsState>,
    pub modal: RwSignal<ModalState>,
    pub reward: RwSignal<RewardState>,
    pub training: RwSignal<TrainingState>,
    pub listings: RwSignal<ListingsState>,
    pub nav: RwSignal<NavState>,
}

impl PageSignals {
    /// Collect the signals provided by `App`.
    pub fn from_context() -> Self {
        Self {
            notifications: expect_context::<RwSignal<NotificationsState>>(),
            modal: expect_context::<RwSignal<ModalState>>(),
            reward: expect_context::<RwSignal<RewardState>>(),
            training: expect_context::<RwSignal<TrainingState>>(),
            listings: expect_context::<RwSignal<ListingsState>>(),
            nav: expect_context::<RwSignal<NavState>>(),
        }
    }

    /// Apply `effects` in order.
    pub fn apply(self, effects: Vec<Effect>) {
        for effect in effects {
            self.apply_one(effect);
        }
    }

    fn apply_one(self, effect: Effect) {
        match effect {
            Effect::Notify(notice) => notify(self.notifications, notice),
            Effect::OpenModal(kind) => self.modal.update(|m| m.open(kind)),
            Effect::CloseModal(kind) => {
                self.modal.update(|m| {
                    m.close(kind);
                });
            }
            Effect::ShowReward(banner) => self.show_reward(banner),
            Effect::ShowRecommendations(items) => {
                log::info!("showing {} recommended internships", items.len());
                self.listings.update(|l| l.replace_internships(items, ListingSource::Remote));
            }
            Effect::SwitchSection(section) => self.nav.update(|n| n.select(section)),
            Effect::FocusChat => focus_chat_input(),
            Effect::Redirect { to, delay_ms, confirm } => redirect(to, delay_ms, confirm),
        }
    }

    fn show_reward(self, banner: RewardBanner) {
        let seq = self.reward.try_update(|r| r.show(banner)).unwrap_or_default();
        log::debug!("reward banner #{seq} shown");

        #[cfg(feature = "hydrate")]
        {
            let reward = self.reward;
            let training = self.training;
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(crate::consts::UiTimings::default().reward_ms).await;
                if reward.try_update(|r| r.dismiss(seq)).unwrap_or(false) {
                    training.try_update(TrainingState::finish_reward);
                }
            });
        }
    }
}

fn focus_chat_input() {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(crate::consts::CHAT_INPUT_ID));
        match element.as_ref().and_then(|el| el.dyn_ref::<web_sys::HtmlElement>()) {
            Some(el) => {
                if let Err(e) = el.focus() {
                    log::warn!("chat input focus failed: {e:?}");
                }
            }
            None => log::debug!("chat input not mounted"),
        }
    }
}

fn redirect(to: &'static str, delay_ms: u32, confirm: Option<&'static str>) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Some(question) = confirm {
            if !window.confirm_with_message(question).unwrap_or(false) {
                return;
            }
        }
        if delay_ms == 0 {
            navigate(&window, to);
        } else {
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(delay_ms).await;
                if let Some(window) = web_sys::window() {
                    navigate(&window, to);
                }
            });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    log::debug!("redirect to {to} after {delay_ms}ms (confirm: {})", confirm.is_some());
}

#[cfg(feature = "hydrate")]
fn navigate(window: &web_sys::Window, to: &str) {
    if let Err(e) = window.location().set_href(to) {
        log::warn!("navigation to {to} failed: {e:?}");
    }
}

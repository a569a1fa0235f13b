//! Side effects requested by state transitions.
//!
//! DESIGN
//! ======
//! Transitions stay pure: they mutate their own state struct and return the
//! effects on *other* page state (modals, notifications, navigation) as
//! values. `util::effects` applies them to the live signals; tests assert on
//! them directly.

use crate::net::types::Internship;
use crate::state::modal::ModalKind;
use crate::state::nav::DashboardSection;
use crate::state::notifications::Notice;
use crate::state::reward::RewardBanner;

/// One requested side effect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    Notify(Notice),
    OpenModal(ModalKind),
    CloseModal(ModalKind),
    ShowReward(RewardBanner),
    ShowRecommendations(Vec<Internship>),
    SwitchSection(DashboardSection),
    FocusChat,
    /// Full-page navigation, optionally delayed and/or confirmed first.
    Redirect {
        to: &'static str,
        delay_ms: u32,
        confirm: Option<&'static str>,
    },
}

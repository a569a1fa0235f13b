//! Declarative mapping from dashboard buttons to their effects.
//!
//! Buttons carry an action value, not a handler name; each action resolves
//! to effects here, once.

#[cfg(test)]
#[path = "actions_test.rs"]
mod actions_test;

use crate::consts::{APPLICATION_SENT, INTERNSHIP_SAVED, LOGOUT_CONFIRM, QUEST_OPENED};
use crate::state::effect::Effect;
use crate::state::nav::DashboardSection;
use crate::state::notifications::Notice;

/// Header / overview shortcut buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuickAction {
    StartNewQuest,
    OpenAiChat,
    Logout,
}

impl QuickAction {
    pub const ALL: [Self; 3] = [Self::StartNewQuest, Self::OpenAiChat, Self::Logout];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::StartNewQuest => "Start New Quest",
            Self::OpenAiChat => "Ask AI Coach",
            Self::Logout => "Exit Game",
        }
    }

    #[must_use]
    pub fn effects(self) -> Vec<Effect> {
        match self {
            Self::StartNewQuest => vec![
                Effect::SwitchSection(DashboardSection::Internships),
                Effect::Notify(Notice::success(QUEST_OPENED)),
            ],
            Self::OpenAiChat => vec![Effect::SwitchSection(DashboardSection::AiCoach), Effect::FocusChat],
            Self::Logout => vec![Effect::Redirect { to: "/", delay_ms: 0, confirm: Some(LOGOUT_CONFIRM) }],
        }
    }
}

/// Buttons on an internship card. Neither is persisted yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InternshipAction {
    Apply(u32),
    Save(u32),
}

impl InternshipAction {
    #[must_use]
    pub fn effects(self) -> Vec<Effect> {
        match self {
            Self::Apply(id) => {
                log::debug!("apply to internship {id}");
                vec![Effect::Notify(Notice::success(APPLICATION_SENT))]
            }
            Self::Save(id) => {
                log::debug!("save internship {id}");
                vec![Effect::Notify(Notice::success(INTERNSHIP_SAVED))]
            }
        }
    }
}

//! Landing-page login and profile-setup flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! Login opens the profile modal on success; a saved profile plays the
//! level-up banner and then redirects to `/dashboard`.

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

use crate::consts::{LOGIN_FAILED, LOGIN_FIELDS_MISSING, LOGIN_WELCOME, NETWORK_ERROR, PROFILE_FAILED, PROFILE_REDIRECT_MS};
use crate::net::api::ApiError;
use crate::net::types::{LoginRequest, LoginResponse, ProfileResponse, ProfileSubmission};
use crate::state::effect::Effect;
use crate::state::modal::ModalKind;
use crate::state::notifications::Notice;
use crate::state::reward::RewardBanner;

/// Roles offered by the login form.
pub const ROLES: &[(&str, &str)] = &[("student", "Student"), ("mentor", "Mentor"), ("admin", "Admin")];

/// Fields of the profile setup form, in display order: `(name, label)`.
pub const PROFILE_FIELDS: &[(&str, &str)] = &[
    ("name", "Name"),
    ("degree", "Degree"),
    ("skills", "Skills"),
    ("interests", "Interests"),
    ("career_goals", "Career goals"),
];

/// Login and profile form state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LandingState {
    pub email: String,
    pub role: String,
    pub profile: ProfileSubmission,
    /// A login or profile call is in flight.
    pub pending: bool,
}

impl LandingState {
    /// Validate the login form.
    ///
    /// # Errors
    ///
    /// Returns the error notification when a field is blank or a call is
    /// already in flight (the latter with no effects).
    pub fn begin_login(&mut self) -> Result<LoginRequest, Vec<Effect>> {
        if self.pending {
            return Err(Vec::new());
        }
        let email = self.email.trim();
        let role = self.role.trim();
        if email.is_empty() || role.is_empty() {
            return Err(vec![Effect::Notify(Notice::error(LOGIN_FIELDS_MISSING))]);
        }
        self.pending = true;
        Ok(LoginRequest { email: email.to_owned(), role: role.to_owned() })
    }

    pub fn finish_login(&mut self, result: Result<LoginResponse, ApiError>) -> Vec<Effect> {
        self.pending = false;
        match result {
            Ok(resp) if resp.success => vec![
                Effect::CloseModal(ModalKind::Login),
                Effect::OpenModal(ModalKind::Profile),
                Effect::Notify(Notice::success(LOGIN_WELCOME)),
            ],
            Ok(resp) => {
                let message = resp.error.unwrap_or_else(|| LOGIN_FAILED.to_owned());
                vec![Effect::Notify(Notice::error(message))]
            }
            Err(e) => {
                log::warn!("login failed: {e}");
                vec![Effect::Notify(Notice::error(NETWORK_ERROR))]
            }
        }
    }

    pub fn set_profile_field(&mut self, name: &str, value: String) {
        self.profile.insert(name.to_owned(), value);
    }

    /// Snapshot the profile form for submission, unless a call is pending.
    pub fn begin_profile(&mut self) -> Option<ProfileSubmission> {
        if self.pending {
            return None;
        }
        self.pending = true;
        Some(self.profile.clone())
    }

    /// Consume the profile reply. On success `pending` stays set until the
    /// redirect leaves the page.
    pub fn finish_profile(&mut self, result: Result<ProfileResponse, ApiError>) -> Vec<Effect> {
        match result {
            Ok(resp) if resp.success => vec![
                Effect::ShowReward(RewardBanner::level_up(1, 25)),
                Effect::Redirect { to: "/dashboard", delay_ms: PROFILE_REDIRECT_MS, confirm: None },
            ],
            Ok(_) => {
                self.pending = false;
                vec![Effect::Notify(Notice::error(PROFILE_FAILED))]
            }
            Err(e) => {
                self.pending = false;
                log::warn!("profile submission failed: {e}");
                vec![Effect::Notify(Notice::error(NETWORK_ERROR))]
            }
        }
    }
}

//! Shared timing constants and fixed user-facing texts.

#[cfg(test)]
#[path = "consts_test.rs"]
mod consts_test;

// ── Timing ──────────────────────────────────────────────────────

/// Lifetime of a notification before auto-dismiss starts.
pub const NOTIFICATION_TIMEOUT_MS: u32 = 5_000;

/// Length of the notification slide-out animation.
pub const EXIT_ANIMATION_MS: u32 = 300;

/// How long the level-up / training-complete banner stays on screen.
pub const REWARD_DURATION_MS: u32 = 3_000;

/// Delay between profile submission and the dashboard redirect.
pub const PROFILE_REDIRECT_MS: u32 = 3_000;

// ── Identity ────────────────────────────────────────────────────

/// Display name sent with scenario starts; the app has no real identity yet.
pub const DEFAULT_PLAYER_NAME: &str = "Player";

/// Style-tag id guarding the one-time notification stylesheet injection.
pub const NOTIFICATION_STYLE_ID: &str = "notification-styles";

/// Element id of the AI coach message input.
pub const CHAT_INPUT_ID: &str = "chatInput";

// ── Texts ───────────────────────────────────────────────────────

pub const NETWORK_ERROR: &str = "Network error. Please try again.";
pub const CHAT_NETWORK_ERROR: &str = "Network error. Please check your connection and try again.";
pub const CHAT_REPLY_ERROR: &str = "Sorry, I encountered an error. Please try again.";
pub const TYPING_TEXT: &str = "AI is thinking...";

pub const LOGIN_FIELDS_MISSING: &str = "Please fill in all fields";
pub const LOGIN_FAILED: &str = "Login failed";
pub const LOGIN_WELCOME: &str = "Welcome to MENTORA! 🎮";
pub const PROFILE_FAILED: &str = "Profile setup failed. Please try again.";

pub const TRAINING_START_FAILED: &str = "Failed to start training scenario";
pub const TRAINING_EMPTY_RESPONSE: &str = "Please enter your response";
pub const TRAINING_RESPONSE_FAILED: &str = "Error processing response";

pub const QUEST_OPENED: &str = "Quest board opened! Find your perfect internship 🎯";
pub const APPLICATION_SENT: &str = "Application submitted! 🚀 Check your email for next steps.";
pub const INTERNSHIP_SAVED: &str = "Internship saved to your favorites! ⭐";
pub const LOGOUT_CONFIRM: &str = "Are you sure you want to exit the game?";

/// Timer settings used by notification and reward scheduling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UiTimings {
    pub notification_ms: u32,
    pub exit_animation_ms: u32,
    pub reward_ms: u32,
    pub redirect_ms: u32,
}

impl Default for UiTimings {
    fn default() -> Self {
        Self {
            notification_ms: NOTIFICATION_TIMEOUT_MS,
            exit_animation_ms: EXIT_ANIMATION_MS,
            reward_ms: REWARD_DURATION_MS,
            redirect_ms: PROFILE_REDIRECT_MS,
        }
    }
}

impl UiTimings {
    /// Upper bound between creation and detachment of a notification nobody
    /// closed by hand.
    #[must_use]
    pub fn notification_lifetime_ms(&self) -> u32 {
        self.notification_ms + self.exit_animation_ms
    }
}

/// Training-complete notice text for the earned XP.
#[must_use]
pub fn training_complete_text(xp: u32) -> String {
    format!("Training complete! +{xp} XP earned! 🏆")
}

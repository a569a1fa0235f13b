//! Player progress shown in the dashboard header and profile panel.

#[cfg(test)]
#[path = "player_test.rs"]
mod player_test;

use crate::consts::DEFAULT_PLAYER_NAME;

/// Level and XP summary for the current player.
///
/// There is no stats endpoint yet, so the dashboard starts from these
/// defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerStats {
    pub name: String,
    pub level: u32,
    pub current_xp: u32,
    pub next_level_xp: u32,
    pub role: String,
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self {
            name: DEFAULT_PLAYER_NAME.to_owned(),
            level: 3,
            current_xp: 245,
            next_level_xp: 300,
            role: "Student Adventurer".to_owned(),
        }
    }
}

impl PlayerStats {
    /// Progress towards the next level, clamped to `0.0..=100.0`.
    #[must_use]
    pub fn xp_percent(&self) -> f64 {
        if self.next_level_xp == 0 {
            return 100.0;
        }
        (f64::from(self.current_xp) / f64::from(self.next_level_xp) * 100.0).clamp(0.0, 100.0)
    }

    /// Inline width style for the XP bar.
    #[must_use]
    pub fn xp_bar_style(&self) -> String {
        format!("width: {:.1}%", self.xp_percent())
    }
}

//! Level-up / training-complete celebration banner.

#[cfg(test)]
#[path = "reward_test.rs"]
mod reward_test;

/// Banner contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RewardBanner {
    pub headline: &'static str,
    pub level: Option<u32>,
    pub xp: u32,
}

impl RewardBanner {
    #[must_use]
    pub fn training_complete(xp: u32) -> Self {
        Self { headline: "TRAINING COMPLETE!", level: None, xp }
    }

    #[must_use]
    pub fn level_up(level: u32, xp: u32) -> Self {
        Self { headline: "LEVEL UP!", level: Some(level), xp }
    }

    #[must_use]
    pub fn xp_label(&self) -> String {
        format!("+{} XP", self.xp)
    }
}

/// The banner currently on screen. `seq` identifies each showing so a late
/// cleanup timer cannot remove a newer banner.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RewardState {
    pub banner: Option<RewardBanner>,
    pub seq: u64,
}

impl RewardState {
    /// Show `banner`, returning the token its cleanup timer must present.
    pub fn show(&mut self, banner: RewardBanner) -> u64 {
        self.seq += 1;
        self.banner = Some(banner);
        self.seq
    }

    /// Clear the banner if it is still the one shown under `seq`.
    pub fn dismiss(&mut self, seq: u64) -> bool {
        if self.seq == seq && self.banner.is_some() {
            self.banner = None;
            true
        } else {
            false
        }
    }
}

//! Dashboard sidebar navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each sidebar item and its content panel share one key: the item carries
//! it as `data-section`, the panel's id is `<key>-section`.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Dashboard content panels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DashboardSection {
    #[default]
    Overview,
    Quests,
    Internships,
    AiCoach,
    Training,
    Profile,
}

impl DashboardSection {
    pub const ALL: [Self; 6] = [
        Self::Overview,
        Self::Quests,
        Self::Internships,
        Self::AiCoach,
        Self::Training,
        Self::Profile,
    ];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Overview => "dashboard",
            Self::Quests => "quests",
            Self::Internships => "internships",
            Self::AiCoach => "ai-coach",
            Self::Training => "communication",
            Self::Profile => "profile",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Dashboard",
            Self::Quests => "Quests",
            Self::Internships => "Internships",
            Self::AiCoach => "AI Coach",
            Self::Training => "Communication",
            Self::Profile => "Profile",
        }
    }

    #[must_use]
    pub fn section_id(self) -> String {
        format!("{}-section", self.key())
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }
}

/// Which dashboard panel is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub active: DashboardSection,
}

impl NavState {
    /// Deactivate everything, then activate `section` and its nav item.
    pub fn select(&mut self, section: DashboardSection) {
        self.active = section;
    }

    #[must_use]
    pub fn is_active(&self, section: DashboardSection) -> bool {
        self.active == section
    }

    /// Class list for a sidebar item.
    #[must_use]
    pub fn item_class(&self, section: DashboardSection) -> &'static str {
        if self.is_active(section) { "nav-item active" } else { "nav-item" }
    }

    /// Class list for a content panel.
    #[must_use]
    pub fn section_class(&self, section: DashboardSection) -> &'static str {
        if self.is_active(section) { "content-section active" } else { "content-section" }
    }
}

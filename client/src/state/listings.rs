//! Internship and scenario card collections.
//!
//! DESIGN
//! ======
//! Each collection has two sources: the backend, or a fixed built-in sample
//! set used whenever the backend fails or replies with an unexpected shape.
//! The choice is made by pure `resolve_*` functions so both branches can be
//! exercised without a network. Every replacement swaps the whole list.

#[cfg(test)]
#[path = "listings_test.rs"]
mod listings_test;

use serde::Deserialize;

use crate::net::api::ApiError;
use crate::net::types::{Difficulty, Internship, Scenario, ScenariosResponse};

/// Where the rendered list came from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListingSource {
    Remote,
    #[default]
    Default,
}

/// Display tier of a match score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchTier {
    High,
    Medium,
    Low,
}

impl MatchTier {
    #[must_use]
    pub fn from_score(score: u32) -> Self {
        match score {
            80.. => Self::High,
            60..80 => Self::Medium,
            _ => Self::Low,
        }
    }

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::High => "match-high",
            Self::Medium => "match-medium",
            Self::Low => "match-low",
        }
    }
}

/// Card collections shown on the dashboard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingsState {
    pub internships: Vec<Internship>,
    pub internships_source: ListingSource,
    pub scenarios: Vec<Scenario>,
    pub scenarios_source: ListingSource,
}

impl Default for ListingsState {
    fn default() -> Self {
        Self {
            internships: sample_internships(),
            internships_source: ListingSource::Default,
            scenarios: sample_scenarios(),
            scenarios_source: ListingSource::Default,
        }
    }
}

impl ListingsState {
    pub fn replace_internships(&mut self, items: Vec<Internship>, source: ListingSource) {
        self.internships = items;
        self.internships_source = source;
    }

    pub fn replace_scenarios(&mut self, items: Vec<Scenario>, source: ListingSource) {
        self.scenarios = items;
        self.scenarios_source = source;
    }
}

/// Pick the scenario list to render from a fetch result.
#[must_use]
pub fn resolve_scenarios(result: Result<ScenariosResponse, ApiError>) -> (Vec<Scenario>, ListingSource) {
    match result {
        Ok(resp) if resp.success && !resp.scenarios.is_empty() => (resp.scenarios, ListingSource::Remote),
        Ok(_) => {
            log::warn!("scenario list missing from reply; using samples");
            (sample_scenarios(), ListingSource::Default)
        }
        Err(e) => {
            log::warn!("scenario fetch failed: {e}; using samples");
            (sample_scenarios(), ListingSource::Default)
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RecommendationEntry {
    Scored { internship: Internship, match_score: Option<u32> },
    Flat(Internship),
}

/// Convert a chat/profile `recommendations` payload into cards.
///
/// Accepts both `[{internship, match_score}]` and a flat internship array;
/// entries of any other shape are skipped.
#[must_use]
pub fn resolve_recommendations(value: &serde_json::Value) -> Vec<Internship> {
    let Some(entries) = value.as_array() else {
        return Vec::new();
    };
    entries
        .iter()
        .filter_map(|entry| match serde_json::from_value::<RecommendationEntry>(entry.clone()) {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::debug!("skipping recommendation entry: {e}");
                None
            }
        })
        .map(|entry| match entry {
            RecommendationEntry::Scored { mut internship, match_score } => {
                if let Some(score) = match_score {
                    internship.match_score = score;
                }
                internship
            }
            RecommendationEntry::Flat(internship) => internship,
        })
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn internship(
    id: u32,
    title: &str,
    company: &str,
    location: &str,
    description: &str,
    match_score: u32,
    stipend: &str,
    duration: &str,
    skills: &[&str],
) -> Internship {
    Internship {
        id,
        title: title.to_owned(),
        company: company.to_owned(),
        location: location.to_owned(),
        description: description.to_owned(),
        match_score,
        stipend: stipend.to_owned(),
        duration: duration.to_owned(),
        required_skills: skills.iter().map(|s| (*s).to_owned()).collect(),
    }
}

/// Built-in internship cards.
#[must_use]
pub fn sample_internships() -> Vec<Internship> {
    vec![
        internship(
            1,
            "Software Engineering Intern",
            "TechCorp",
            "San Francisco, CA",
            "Work on full-stack web development projects using Python, JavaScript, and React",
            85,
            "$2500/month",
            "3 months",
            &["Python", "JavaScript", "React", "Git"],
        ),
        internship(
            2,
            "Data Science Intern",
            "DataFlow Analytics",
            "New York, NY",
            "Analyze large datasets and build machine learning models for business insights",
            78,
            "$3000/month",
            "4 months",
            &["Python", "Machine Learning", "SQL", "Statistics"],
        ),
        internship(
            3,
            "UX Design Intern",
            "DesignStudio",
            "Austin, TX",
            "Create user-centered designs and conduct usability testing",
            65,
            "$2200/month",
            "4 months",
            &["Design Thinking", "Figma", "User Research", "Prototyping"],
        ),
    ]
}

/// Built-in training scenarios.
#[must_use]
pub fn sample_scenarios() -> Vec<Scenario> {
    let scenario = |id: &str, title: &str, description: &str, difficulty, xp_reward| Scenario {
        id: id.to_owned(),
        title: title.to_owned(),
        description: description.to_owned(),
        difficulty,
        xp_reward,
    };
    vec![
        scenario(
            "job_interview",
            "Job Interview Practice",
            "Practice common interview questions and get feedback on your responses",
            Difficulty::Intermediate,
            25,
        ),
        scenario(
            "networking_event",
            "Networking Event Simulation",
            "Practice introducing yourself and making professional connections",
            Difficulty::Beginner,
            15,
        ),
        scenario(
            "salary_negotiation",
            "Salary Negotiation",
            "Learn how to negotiate salary and benefits effectively",
            Difficulty::Advanced,
            35,
        ),
    ]
}

//! Request/response DTOs for the backend JSON API.
//!
//! DESIGN
//! ======
//! The backend is an external collaborator, so every optional or
//! occasionally-missing field carries `#[serde(default)]`. Shape problems are
//! judged by the state machines, not by the decoder.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// `POST /api/login` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub role: String,
}

/// `POST /api/login` reply.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// `POST /api/submit-profile` body: the profile form's fields, by name.
pub type ProfileSubmission = BTreeMap<String, String>;

/// `POST /api/submit-profile` reply.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ProfileResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub recommendations: Option<serde_json::Value>,
}

/// `POST /api/chat` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    pub message: String,
}

/// `POST /api/chat` reply.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub recommendations: Option<serde_json::Value>,
}

/// Internship card record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Internship {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    /// Precomputed relevance percentage, display only.
    #[serde(default)]
    pub match_score: u32,
    #[serde(default)]
    pub stipend: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
}

/// Training scenario card record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub xp_reward: u32,
}

/// Scenario difficulty badge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

impl Difficulty {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

/// `GET /api/communication/scenarios` reply.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ScenariosResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub scenarios: Vec<Scenario>,
}

/// `POST /api/communication/start` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StartScenarioRequest {
    pub scenario_type: String,
    pub user_name: String,
}

/// Scenario header echoed back on start.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ScenarioHeader {
    #[serde(default)]
    pub title: String,
}

/// `POST /api/communication/start` reply.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct StartScenarioResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub scenario: Option<ScenarioHeader>,
    #[serde(default)]
    pub introduction: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// `POST /api/communication/respond` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RespondRequest {
    pub user_response: String,
}

/// `POST /api/communication/respond` reply.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct RespondResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub scenario_complete: bool,
    #[serde(default)]
    pub xp_earned: Option<u32>,
    #[serde(default)]
    pub coach_response: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

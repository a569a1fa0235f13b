use super::*;

// =============================================================
// Requests
// =============================================================

#[test]
fn start_request_uses_backend_field_names() {
    let req = StartScenarioRequest { scenario_type: "job_interview".into(), user_name: "Player".into() };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json, serde_json::json!({ "scenario_type": "job_interview", "user_name": "Player" }));
}

#[test]
fn respond_request_serializes_user_response() {
    let req = RespondRequest { user_response: "hello".into() };
    assert_eq!(serde_json::to_value(&req).unwrap(), serde_json::json!({ "user_response": "hello" }));
}

#[test]
fn profile_submission_is_a_flat_field_map() {
    let mut form = ProfileSubmission::new();
    form.insert("name".into(), "Ada".into());
    form.insert("degree".into(), "CS".into());
    assert_eq!(serde_json::to_value(&form).unwrap(), serde_json::json!({ "degree": "CS", "name": "Ada" }));
}

// =============================================================
// Replies
// =============================================================

#[test]
fn login_response_defaults_missing_fields() {
    let resp: LoginResponse = serde_json::from_str("{}").unwrap();
    assert!(!resp.success);
    assert!(resp.error.is_none());
}

#[test]
fn respond_response_parses_completion() {
    let resp: RespondResponse =
        serde_json::from_str(r#"{"success":true,"scenario_complete":true,"xp_earned":25,"coach_response":"Great"}"#)
            .unwrap();
    assert!(resp.scenario_complete);
    assert_eq!(resp.xp_earned, Some(25));
}

#[test]
fn respond_response_without_completion_flag_is_incomplete() {
    let resp: RespondResponse = serde_json::from_str(r#"{"success":true,"coach_response":"Next?"}"#).unwrap();
    assert!(!resp.scenario_complete);
    assert_eq!(resp.coach_response.as_deref(), Some("Next?"));
}

#[test]
fn scenario_difficulty_parses_lowercase() {
    let s: Scenario = serde_json::from_str(
        r#"{"id":"salary_negotiation","title":"Salary Negotiation","description":"d","difficulty":"advanced","xp_reward":35}"#,
    )
    .unwrap();
    assert_eq!(s.difficulty, Difficulty::Advanced);
    assert_eq!(s.xp_reward, 35);
}

#[test]
fn internship_tolerates_missing_display_fields() {
    let i: Internship = serde_json::from_str(r#"{"id":4,"title":"Marketing Intern"}"#).unwrap();
    assert_eq!(i.match_score, 0);
    assert!(i.required_skills.is_empty());
}

#[test]
fn start_response_keeps_embedded_error() {
    let resp: StartScenarioResponse =
        serde_json::from_str(r#"{"success":true,"error":"Invalid scenario type"}"#).unwrap();
    assert!(resp.success);
    assert!(resp.scenario.is_none());
    assert_eq!(resp.error.as_deref(), Some("Invalid scenario type"));
}

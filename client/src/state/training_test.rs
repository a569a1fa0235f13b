use super::*;
use crate::net::types::ScenarioHeader;
use crate::state::notifications::NoticeKind;

fn first_notice(effects: &[Effect]) -> Option<&Notice> {
    effects.iter().find_map(|e| match e {
        Effect::Notify(n) => Some(n),
        _ => None,
    })
}

fn started(title: &str, intro: &str) -> StartScenarioResponse {
    StartScenarioResponse {
        success: true,
        scenario: Some(ScenarioHeader { title: title.to_owned() }),
        introduction: Some(intro.to_owned()),
        error: None,
    }
}

fn active_state() -> TrainingState {
    let mut state = TrainingState::default();
    state.begin_start("job_interview").unwrap();
    state.finish_start("job_interview", Ok(started("Job Interview Practice", "Tell me about yourself.")));
    state
}

fn complete(xp: u32) -> RespondResponse {
    RespondResponse {
        success: true,
        scenario_complete: true,
        xp_earned: Some(xp),
        coach_response: Some("Well done".into()),
        error: None,
    }
}

// =============================================================
// start
// =============================================================

#[test]
fn default_is_idle() {
    let state = TrainingState::default();
    assert_eq!(state.phase, TrainingPhase::Idle);
    assert!(!state.is_pending());
}

#[test]
fn begin_start_builds_request_with_player_name() {
    let mut state = TrainingState::default();
    let req = state.begin_start("networking_event").unwrap();
    assert_eq!(req.scenario_type, "networking_event");
    assert_eq!(req.user_name, "Player");
    assert!(state.is_pending());
}

#[test]
fn successful_start_activates_and_opens_modal() {
    let mut state = TrainingState::default();
    state.begin_start("job_interview").unwrap();
    let effects = state.finish_start("job_interview", Ok(started("Job Interview Practice", "Hello!")));
    assert_eq!(effects, vec![Effect::OpenModal(ModalKind::Training)]);
    let session = state.session().unwrap();
    assert_eq!(session.title, "Job Interview Practice");
    assert_eq!(session.prompt, "Hello!");
    assert!(state.response_draft.is_empty());
    assert!(!state.is_pending());
}

#[test]
fn failed_start_stays_idle_and_notifies() {
    let mut state = TrainingState::default();
    state.begin_start("job_interview").unwrap();
    let effects = state.finish_start("job_interview", Err(ApiError::Network("offline".into())));
    assert_eq!(state.phase, TrainingPhase::Idle);
    let notice = first_notice(&effects).unwrap();
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.message, NETWORK_ERROR);
}

#[test]
fn unsuccessful_start_reply_notifies_start_failure() {
    let mut state = TrainingState::default();
    state.begin_start("bogus").unwrap();
    let effects = state.finish_start(
        "bogus",
        Ok(StartScenarioResponse { success: false, error: Some("Invalid".into()), ..Default::default() }),
    );
    assert_eq!(state.phase, TrainingPhase::Idle);
    assert_eq!(first_notice(&effects).unwrap().message, TRAINING_START_FAILED);
}

#[test]
fn start_reply_without_introduction_is_a_failure() {
    let mut state = TrainingState::default();
    state.begin_start("bogus").unwrap();
    let effects = state.finish_start(
        "bogus",
        Ok(StartScenarioResponse { success: true, error: Some("Invalid scenario type".into()), ..Default::default() }),
    );
    assert_eq!(state.phase, TrainingPhase::Idle);
    assert!(!effects.contains(&Effect::OpenModal(ModalKind::Training)));
}

#[test]
fn second_start_while_pending_is_rejected() {
    let mut state = TrainingState::default();
    state.begin_start("job_interview").unwrap();
    assert!(state.begin_start("salary_negotiation").is_none());
}

#[test]
fn start_while_active_replaces_session() {
    let mut state = active_state();
    state.begin_start("salary_negotiation").unwrap();
    state.finish_start("salary_negotiation", Ok(started("Salary Negotiation", "Make your ask.")));
    let session = state.session().unwrap();
    assert_eq!(session.scenario_id, "salary_negotiation");
    assert_eq!(session.prompt, "Make your ask.");
}

#[test]
fn failed_restart_keeps_existing_session() {
    let mut state = active_state();
    state.begin_start("salary_negotiation").unwrap();
    state.finish_start("salary_negotiation", Err(ApiError::Status(500)));
    assert_eq!(state.session().unwrap().scenario_id, "job_interview");
}

// =============================================================
// submit
// =============================================================

#[test]
fn empty_response_stays_active_with_error_and_no_request() {
    let mut state = active_state();
    let effects = state.begin_submit("   ").unwrap_err();
    assert!(state.is_active());
    assert!(!state.is_pending());
    let notice = first_notice(&effects).unwrap();
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.message, TRAINING_EMPTY_RESPONSE);
}

#[test]
fn submit_builds_trimmed_request() {
    let mut state = active_state();
    let req = state.begin_submit("  I am a quick learner. ").unwrap().unwrap();
    assert_eq!(req.user_response, "I am a quick learner.");
    assert!(state.is_pending());
}

#[test]
fn completion_closes_modal_notifies_xp_and_clears_session() {
    let mut state = active_state();
    state.begin_submit("answer").unwrap().unwrap();
    let effects = state.finish_submit(Ok(complete(25)));

    assert!(effects.contains(&Effect::CloseModal(ModalKind::Training)));
    assert!(effects.contains(&Effect::ShowReward(RewardBanner::training_complete(25))));
    let notice = first_notice(&effects).unwrap();
    assert_eq!(notice.kind, NoticeKind::Success);
    assert!(notice.message.contains("25"));
    assert_eq!(state.phase, TrainingPhase::Completed { xp: 25 });
    assert!(state.session().is_none());

    // Session is gone: further calls are guarded no-ops.
    assert!(state.cancel().is_empty());
    assert_eq!(state.begin_submit("again"), Ok(None));
}

#[test]
fn completed_returns_to_idle_after_reward() {
    let mut state = active_state();
    state.begin_submit("answer").unwrap().unwrap();
    state.finish_submit(Ok(complete(15)));
    assert!(state.finish_reward());
    assert_eq!(state.phase, TrainingPhase::Idle);
    assert!(!state.finish_reward());
}

#[test]
fn finish_reward_leaves_new_session_alone() {
    let mut state = active_state();
    state.begin_submit("answer").unwrap().unwrap();
    state.finish_submit(Ok(complete(15)));
    state.begin_start("networking_event").unwrap();
    state.finish_start("networking_event", Ok(started("Networking", "Hi")));
    assert!(!state.finish_reward());
    assert!(state.is_active());
}

#[test]
fn coach_reply_replaces_prompt_and_clears_draft() {
    let mut state = active_state();
    state.response_draft = "answer".into();
    state.begin_submit("answer").unwrap().unwrap();
    let effects = state.finish_submit(Ok(RespondResponse {
        success: true,
        coach_response: Some("Good. Now describe a challenge.".into()),
        ..Default::default()
    }));
    assert!(effects.is_empty());
    assert_eq!(state.session().unwrap().prompt, "Good. Now describe a challenge.");
    assert!(state.response_draft.is_empty());
}

#[test]
fn transport_failure_on_submit_stays_active() {
    let mut state = active_state();
    state.begin_submit("answer").unwrap().unwrap();
    let effects = state.finish_submit(Err(ApiError::Network("offline".into())));
    assert!(state.is_active());
    assert!(!state.is_pending());
    assert_eq!(first_notice(&effects).unwrap().message, NETWORK_ERROR);
    // The user may retry.
    assert!(state.begin_submit("answer").unwrap().is_some());
}

#[test]
fn unsuccessful_reply_stays_active() {
    let mut state = active_state();
    state.begin_submit("answer").unwrap().unwrap();
    let effects = state.finish_submit(Ok(RespondResponse::default()));
    assert!(state.is_active());
    assert_eq!(first_notice(&effects).unwrap().message, TRAINING_RESPONSE_FAILED);
}

#[test]
fn submit_while_pending_is_noop() {
    let mut state = active_state();
    state.begin_submit("one").unwrap().unwrap();
    assert_eq!(state.begin_submit("two"), Ok(None));
}

#[test]
fn submit_when_idle_is_noop() {
    let mut state = TrainingState::default();
    assert_eq!(state.begin_submit("hello"), Ok(None));
    assert!(!state.is_pending());
}

// =============================================================
// cancel
// =============================================================

#[test]
fn cancel_closes_modal_and_discards_session() {
    let mut state = active_state();
    state.response_draft = "half".into();
    let effects = state.cancel();
    assert_eq!(effects, vec![Effect::CloseModal(ModalKind::Training)]);
    assert_eq!(state.phase, TrainingPhase::Idle);
    assert!(state.response_draft.is_empty());
}

#[test]
fn reply_arriving_after_cancel_is_ignored() {
    let mut state = active_state();
    state.begin_submit("answer").unwrap().unwrap();
    state.cancel();
    let effects = state.finish_submit(Ok(complete(25)));
    assert!(effects.is_empty());
    assert_eq!(state.phase, TrainingPhase::Idle);
}

#[test]
fn failed_reply_arriving_after_cancel_is_ignored() {
    let mut state = active_state();
    state.begin_submit("answer").unwrap().unwrap();
    state.cancel();
    let effects = state.finish_submit(Err(ApiError::Network("offline".into())));
    assert!(effects.is_empty());
    assert_eq!(state.phase, TrainingPhase::Idle);
}

#[test]
fn cancel_during_submit_allows_a_new_start() {
    let mut state = active_state();
    state.begin_submit("answer").unwrap().unwrap();
    state.cancel();
    assert!(!state.is_pending());
    assert!(state.begin_start("networking_event").is_some());
}

#[test]
fn late_reply_does_not_touch_the_next_session() {
    let mut state = active_state();
    state.begin_submit("answer").unwrap().unwrap();
    state.cancel();
    state.begin_start("networking_event").unwrap();
    state.finish_start("networking_event", Ok(started("Networking", "Hi there.")));
    state.begin_submit("hello").unwrap().unwrap();

    // The abandoned reply lands first and is dropped; the new call stays pending.
    assert!(state.finish_submit(Ok(complete(25))).is_empty());
    assert!(state.is_active());
    assert_eq!(state.pending, Some(PendingCall::Respond));

    let effects = state.finish_submit(Ok(RespondResponse {
        success: true,
        coach_response: Some("Nice opener.".into()),
        ..Default::default()
    }));
    assert!(effects.is_empty());
    assert_eq!(state.session().unwrap().prompt, "Nice opener.");
    assert!(!state.is_pending());
}

//! Communication-training session state machine.
//!
//! DESIGN
//! ======
//! `Idle -> Active -> Completed -> Idle`, with `cancel` taking `Active`
//! straight back to `Idle`. `Completed` lasts while the reward banner is on
//! screen and holds no session. The page owns a single [`TrainingState`], so
//! there is exactly one session slot: starting a scenario while another is
//! active replaces it.
//!
//! Every network call is split into `begin_*` (validates and returns the
//! request to issue) and `finish_*` (consumes the result). A failed call
//! leaves the phase exactly as it was before `begin_*`; nothing is half
//! applied. `pending` rejects a second call while one is in flight.
//! Cancelling drops an in-flight respond call: its reply, success or
//! failure, is discarded when it lands.

#[cfg(test)]
#[path = "training_test.rs"]
mod training_test;

use crate::consts::{
    DEFAULT_PLAYER_NAME, NETWORK_ERROR, TRAINING_EMPTY_RESPONSE, TRAINING_RESPONSE_FAILED, TRAINING_START_FAILED,
    training_complete_text,
};
use crate::net::api::ApiError;
use crate::net::types::{RespondRequest, RespondResponse, StartScenarioRequest, StartScenarioResponse};
use crate::state::effect::Effect;
use crate::state::modal::ModalKind;
use crate::state::notifications::Notice;
use crate::state::reward::RewardBanner;

/// The one live scenario run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrainingSession {
    pub scenario_id: String,
    pub title: String,
    /// Latest coach text shown above the response field.
    pub prompt: String,
}

/// Where the session state machine is.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum TrainingPhase {
    #[default]
    Idle,
    Active(TrainingSession),
    /// Scenario finished; the reward is being shown.
    Completed { xp: u32 },
}

/// Which call is in flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PendingCall {
    Start,
    Respond,
}

/// Page-owned holder for the single training slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrainingState {
    pub phase: TrainingPhase,
    pub pending: Option<PendingCall>,
    /// A respond call was abandoned by `cancel`; its reply is dropped.
    discard_respond: bool,
    /// Contents of the response text area.
    pub response_draft: String,
}

impl TrainingState {
    #[must_use]
    pub fn session(&self) -> Option<&TrainingSession> {
        match &self.phase {
            TrainingPhase::Active(session) => Some(session),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.session().is_some()
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Request to start `scenario_id`, unless a call is already in flight.
    pub fn begin_start(&mut self, scenario_id: &str) -> Option<StartScenarioRequest> {
        if self.is_pending() {
            log::debug!("training start rejected: call pending");
            return None;
        }
        self.pending = Some(PendingCall::Start);
        Some(StartScenarioRequest { scenario_type: scenario_id.to_owned(), user_name: DEFAULT_PLAYER_NAME.to_owned() })
    }

    /// Consume the start reply.
    pub fn finish_start(&mut self, scenario_id: &str, result: Result<StartScenarioResponse, ApiError>) -> Vec<Effect> {
        self.pending = None;
        let resp = match result {
            Ok(resp) => resp,
            Err(e) => {
                log::warn!("training start failed: {e}");
                return vec![Effect::Notify(Notice::error(NETWORK_ERROR))];
            }
        };

        let (true, Some(introduction)) = (resp.success, resp.introduction) else {
            log::warn!("training start rejected: {}", resp.error.as_deref().unwrap_or("no introduction"));
            return vec![Effect::Notify(Notice::error(TRAINING_START_FAILED))];
        };

        let title = resp.scenario.map(|s| s.title).unwrap_or_default();
        if let Some(prev) = self.session() {
            log::debug!("training session {} replaced by {scenario_id}", prev.scenario_id);
        }
        self.phase = TrainingPhase::Active(TrainingSession { scenario_id: scenario_id.to_owned(), title, prompt: introduction });
        self.response_draft.clear();
        vec![Effect::OpenModal(ModalKind::Training)]
    }

    /// Validate the draft response.
    ///
    /// * `Ok(None)`: no active session (or a call in flight); nothing to do.
    /// * `Ok(Some(req))`: issue `req`.
    /// * `Err(effects)`: validation failed; show `effects`, stay active.
    ///
    /// # Errors
    ///
    /// Returns the error notification when the trimmed response is empty.
    pub fn begin_submit(&mut self, text: &str) -> Result<Option<RespondRequest>, Vec<Effect>> {
        if !self.is_active() || self.is_pending() {
            return Ok(None);
        }
        let user_response = text.trim();
        if user_response.is_empty() {
            return Err(vec![Effect::Notify(Notice::error(TRAINING_EMPTY_RESPONSE))]);
        }
        self.pending = Some(PendingCall::Respond);
        Ok(Some(RespondRequest { user_response: user_response.to_owned() }))
    }

    /// Consume the respond reply.
    pub fn finish_submit(&mut self, result: Result<RespondResponse, ApiError>) -> Vec<Effect> {
        if self.discard_respond {
            // `pending` may belong to a newer call by now.
            self.discard_respond = false;
            log::debug!("training reply dropped: session was cancelled");
            return Vec::new();
        }
        self.pending = None;
        let TrainingPhase::Active(session) = &mut self.phase else {
            return Vec::new();
        };
        let resp = match result {
            Ok(resp) => resp,
            Err(e) => {
                log::warn!("training response failed: {e}");
                return vec![Effect::Notify(Notice::error(NETWORK_ERROR))];
            }
        };
        if !resp.success {
            return vec![Effect::Notify(Notice::error(TRAINING_RESPONSE_FAILED))];
        }

        if resp.scenario_complete {
            let xp = resp.xp_earned.unwrap_or_default();
            log::debug!("training {} complete: +{xp} XP", session.scenario_id);
            self.phase = TrainingPhase::Completed { xp };
            self.response_draft.clear();
            return vec![
                Effect::ShowReward(RewardBanner::training_complete(xp)),
                Effect::CloseModal(ModalKind::Training),
                Effect::Notify(Notice::success(training_complete_text(xp))),
            ];
        }

        match resp.coach_response {
            Some(prompt) => {
                session.prompt = prompt;
                self.response_draft.clear();
                Vec::new()
            }
            None => vec![Effect::Notify(Notice::error(TRAINING_RESPONSE_FAILED))],
        }
    }

    /// Leave `Completed` once the reward has been shown. A session started
    /// in the meantime is left alone.
    pub fn finish_reward(&mut self) -> bool {
        if matches!(self.phase, TrainingPhase::Completed { .. }) {
            self.phase = TrainingPhase::Idle;
            true
        } else {
            false
        }
    }

    /// End the session without completing it.
    pub fn cancel(&mut self) -> Vec<Effect> {
        if !self.is_active() {
            return Vec::new();
        }
        if self.pending == Some(PendingCall::Respond) {
            self.pending = None;
            self.discard_respond = true;
        }
        self.phase = TrainingPhase::Idle;
        self.response_draft.clear();
        vec![Effect::CloseModal(ModalKind::Training)]
    }
}

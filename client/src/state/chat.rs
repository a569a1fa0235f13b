//! AI coach chat transcript.
//!
//! DESIGN
//! ======
//! A send is split into `begin_send` (optimistic user entry + typing
//! indicator, returns the request to issue) and `finish_send` (consumes the
//! network result). The transcript is append-only; exactly one AI entry is
//! appended per finished send, whatever the outcome.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::consts::{CHAT_NETWORK_ERROR, CHAT_REPLY_ERROR};
use crate::net::api::ApiError;
use crate::net::types::{ChatReply, ChatRequest};
use crate::state::effect::Effect;
use crate::state::listings::resolve_recommendations;

/// Who wrote a transcript entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatSender {
    User,
    Ai,
}

impl ChatSender {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::User => "message user-message",
            Self::Ai => "message ai-message",
        }
    }
}

/// A single transcript entry.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: u64,
    pub text: String,
    pub sender: ChatSender,
    /// Epoch milliseconds.
    pub timestamp: f64,
}

/// State for the AI coach chat panel.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    /// Typing indicator shown after the newest user message.
    pub typing: bool,
    /// A request is awaiting its reply.
    pub in_flight: bool,
    pub next_id: u64,
}

impl ChatState {
    /// Validate and record an outgoing message.
    ///
    /// Returns `None`, with no transcript change, for whitespace-only input
    /// or while a previous message is still awaiting its reply.
    pub fn begin_send(&mut self, raw: &str, now: f64) -> Option<ChatRequest> {
        let message = raw.trim();
        if message.is_empty() {
            return None;
        }
        if self.in_flight {
            log::debug!("chat send rejected: reply pending");
            return None;
        }
        self.append(message.to_owned(), ChatSender::User, now);
        self.typing = true;
        self.in_flight = true;
        Some(ChatRequest { message: message.to_owned() })
    }

    /// Consume the reply (or failure) for the pending message.
    pub fn finish_send(&mut self, result: Result<ChatReply, ApiError>, now: f64) -> Vec<Effect> {
        self.typing = false;
        self.in_flight = false;

        let reply = match result {
            Ok(reply) => reply,
            Err(e) => {
                log::warn!("chat request failed: {e}");
                self.append(CHAT_NETWORK_ERROR.to_owned(), ChatSender::Ai, now);
                return Vec::new();
            }
        };

        let Some(text) = reply.response.filter(|t| !t.trim().is_empty()) else {
            self.append(CHAT_REPLY_ERROR.to_owned(), ChatSender::Ai, now);
            return Vec::new();
        };
        self.append(text, ChatSender::Ai, now);

        match reply.recommendations.as_ref().map(resolve_recommendations) {
            Some(items) if !items.is_empty() => vec![Effect::ShowRecommendations(items)],
            _ => Vec::new(),
        }
    }

    fn append(&mut self, text: String, sender: ChatSender, now: f64) {
        self.next_id += 1;
        self.messages.push(ChatMessage { id: self.next_id, text, sender, timestamp: now });
    }
}

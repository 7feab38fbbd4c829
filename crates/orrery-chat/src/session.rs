use serde::Serialize;

use crate::config::ChatConfig;
use crate::error::ChatResult;
use crate::history::{ChatEntry, ChatLog};
use crate::protocol::{encode_request, PendingRequest, Reply};
use crate::state::ChatState;

/// Transport-free chat state machine: `Idle → Sending → Idle`.
///
/// `submit` produces the request to send; the caller hands the outcome
/// back through `complete`.
#[derive(Debug, Default)]
pub struct ChatSession {
    config: ChatConfig,
    state: ChatState,
    thread_id: Option<String>,
    /// A reply arrived in this conversation; later messages are follow-ups.
    replied: bool,
    log: ChatLog,
}

/// Leftovers of a conversation the caller has to act on.
#[derive(Debug, Default, PartialEq)]
pub struct Restart {
    /// Server-side reset to send, when a reset endpoint is configured.
    pub reset: Option<PendingRequest>,
    /// Object URLs of the cleared image entries, to revoke.
    pub released_urls: Vec<String>,
}

/// What the page needs to redraw the widget.
#[derive(Debug, Serialize)]
pub struct ChatSnapshot<'a> {
    pub sending: bool,
    pub thread_id: Option<&'a str>,
    pub entries: &'a ChatLog,
}

impl ChatSession {
    pub fn new(config: ChatConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Start a request for `text`. Returns `None`, changing nothing, when the
    /// trimmed text is empty or a request is already in flight.
    pub fn submit(&mut self, text: &str) -> Option<PendingRequest> {
        let text = text.trim();
        if text.is_empty() || self.state.is_sending() {
            return None;
        }

        let body = match encode_request(self.config.request_field, text, self.thread_id.as_deref()) {
            Ok(body) => body,
            Err(err) => {
                log::error!("failed to encode chat request: {err}");
                return None;
            }
        };

        self.log.push(ChatEntry::User { text: text.to_string() });
        self.state = ChatState::Sending;
        Some(PendingRequest {
            endpoint: self.next_endpoint().to_string(),
            body,
        })
    }

    fn next_endpoint(&self) -> &str {
        match (&self.config.follow_up_endpoint, self.replied) {
            (Some(follow_up), true) => follow_up,
            _ => &self.config.endpoint,
        }
    }

    /// Finish the in-flight request. Always returns to `Idle`.
    pub fn complete(&mut self, result: ChatResult<Reply>) {
        if !self.state.is_sending() {
            log::warn!("chat reply arrived with no request in flight, ignoring");
            return;
        }

        match result {
            Ok(Reply::Text(reply)) => {
                if reply.id.is_some() {
                    self.thread_id = reply.id;
                }
                self.replied = true;
                self.log.push(ChatEntry::Assistant { text: reply.response });
            }
            Ok(Reply::Image { url }) => {
                self.replied = true;
                self.log.push(ChatEntry::Image { url });
            }
            Err(err) => {
                log::error!("chat request failed: {err}");
                self.log.push(ChatEntry::Error { text: self.config.error_message.clone() });
            }
        }
        self.state = ChatState::Idle;
    }

    /// Start over: forget the thread, clear the log and go back to the first
    /// endpoint. Refused (`None`) while a request is in flight.
    pub fn new_conversation(&mut self) -> Option<Restart> {
        if self.state.is_sending() {
            log::warn!("new conversation requested while a reply is pending, ignoring");
            return None;
        }
        self.thread_id = None;
        self.replied = false;
        let released_urls = self.log.clear();
        let reset = self.config.reset_endpoint.as_ref().map(|endpoint| PendingRequest {
            endpoint: endpoint.clone(),
            body: String::from("{}"),
        });
        Some(Restart { reset, released_urls })
    }

    pub fn state(&self) -> ChatState {
        self.state
    }

    pub fn thread_id(&self) -> Option<&str> {
        self.thread_id.as_deref()
    }

    pub fn log(&self) -> &ChatLog {
        &self.log
    }

    pub fn config(&self) -> &ChatConfig {
        &self.config
    }

    pub fn snapshot(&self) -> ChatSnapshot<'_> {
        ChatSnapshot {
            sending: self.state.is_sending(),
            thread_id: self.thread_id.as_deref(),
            entries: &self.log,
        }
    }

    pub fn snapshot_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.snapshot())
    }
}

//! Conversation history
//!
//! An append-only record of every response an engine instance has produced.
//! There is no hard cap: production sizing is left to callers, who should
//! replay at most [`ConversationHistory::recent`] entries when building
//! prompt context.

use chrono::{DateTime, Utc};
use finsage_core::response::AdvisorResponse;

/// Append-only sequence of responses for one conversation session
#[derive(Debug, Clone)]
pub struct ConversationHistory {
    session_id: String,
    started_at: DateTime<Utc>,
    responses: Vec<AdvisorResponse>,
}

impl Default for ConversationHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversationHistory {
    /// Empty history with a fresh session id
    pub fn new() -> Self {
        Self {
            session_id: uuid::Uuid::new_v4().to_string(),
            started_at: Utc::now(),
            responses: Vec::new(),
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// When this session was opened
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Append a response. Entries are never removed or reordered.
    pub fn push(&mut self, response: AdvisorResponse) {
        self.responses.push(response);
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    /// All responses, oldest first.
    pub fn entries(&self) -> &[AdvisorResponse] {
        &self.responses
    }

    /// The most recent `n` responses, oldest first.
    pub fn recent(&self, n: usize) -> &[AdvisorResponse] {
        let start = self.responses.len().saturating_sub(n);
        &self.responses[start..]
    }
}

use std::time::{SystemTime, UNIX_EPOCH};

use super::ids::MessageId;
use super::types::{MessagePatch, MessageRecord, MessageRole, SessionState};

/// In-memory owner of one conversation and its session scalars.
///
/// Every action is total: targeting an id that is not in the list is a
/// silent no-op, so callers may repeat updates and removals freely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatStore {
    messages: Vec<MessageRecord>,
    session: SessionState,
}

impl ChatStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty conversation with pre-seeded session scalars.
    pub fn with_session(session: SessionState) -> Self {
        Self {
            messages: Vec::new(),
            session,
        }
    }

    /// Appends a new message and returns a copy of it.
    pub fn add_message(
        &mut self,
        role: MessageRole,
        content: impl Into<String>,
        is_loading: Option<bool>,
    ) -> MessageRecord {
        let record = MessageRecord {
            id: self.next_id(),
            role,
            content: content.into(),
            timestamp_unix_ms: now_unix_millis(),
            is_loading,
        };
        self.messages.push(record.clone());
        record
    }

    pub fn update_message(&mut self, id: MessageId, patch: MessagePatch) {
        if patch.is_empty() {
            return;
        }
        if let Some(record) = self.messages.iter_mut().find(|record| record.id == id) {
            patch.apply(record);
        }
    }

    pub fn remove_message(&mut self, id: MessageId) {
        if let Some(index) = self.position(id) {
            self.messages.remove(index);
        }
    }

    pub fn clear_messages(&mut self) {
        self.messages.clear();
    }

    pub fn set_typing(&mut self, is_typing: bool) {
        self.session.is_typing = is_typing;
    }

    pub fn set_api_key(&mut self, api_key: impl Into<String>) {
        self.session.api_key = api_key.into();
    }

    pub fn set_model(&mut self, model: impl Into<String>) {
        self.session.model = model.into();
    }

    pub fn messages(&self) -> &[MessageRecord] {
        &self.messages
    }

    pub fn get_message(&self, id: MessageId) -> Option<&MessageRecord> {
        self.messages.iter().find(|record| record.id == id)
    }

    pub fn last_message(&self) -> Option<&MessageRecord> {
        self.messages.last()
    }

    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    pub fn has_api_key(&self) -> bool {
        !self.session.api_key.is_empty()
    }

    pub fn is_typing(&self) -> bool {
        self.session.is_typing
    }

    pub fn api_key(&self) -> &str {
        &self.session.api_key
    }

    pub fn model(&self) -> &str {
        &self.session.model
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    fn position(&self, id: MessageId) -> Option<usize> {
        self.messages.iter().position(|record| record.id == id)
    }

    // v7 ids are unique in practice; the loop keeps the invariant even if the
    // clock and counter ever hand back an id that is still live.
    fn next_id(&self) -> MessageId {
        loop {
            let candidate = MessageId::new_v7();
            if self.position(candidate).is_none() {
                return candidate;
            }
        }
    }
}

fn now_unix_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |duration| duration.as_millis() as u64)
}

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ids::MessageId;

/// Model selected for a fresh session.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Author of one chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

impl MessageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

impl fmt::Display for MessageRole {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// One turn of a conversation.
///
/// `id`, `role` and `timestamp_unix_ms` are fixed at insertion. Only `content`
/// and `is_loading` change afterwards, through [`MessagePatch`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageRecord {
    pub id: MessageId,
    pub role: MessageRole,
    pub content: String,
    #[serde(rename = "timestamp")]
    pub timestamp_unix_ms: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_loading: Option<bool>,
}

/// Fields of a [`MessageRecord`] that may be replaced after creation.
///
/// `None` leaves the field untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MessagePatch {
    pub content: Option<String>,
    pub is_loading: Option<bool>,
}

impl MessagePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn loading(mut self, is_loading: bool) -> Self {
        self.is_loading = Some(is_loading);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_none() && self.is_loading.is_none()
    }

    pub(crate) fn apply(self, record: &mut MessageRecord) {
        if let Some(content) = self.content {
            record.content = content;
        }
        if let Some(is_loading) = self.is_loading {
            record.is_loading = Some(is_loading);
        }
    }
}

/// Session scalars owned next to the message list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub is_typing: bool,
    /// Empty means unset.
    pub api_key: String,
    pub model: String,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            is_typing: false,
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(is_loading: Option<bool>) -> MessageRecord {
        MessageRecord {
            id: MessageId::new_v7(),
            role: MessageRole::Assistant,
            content: "hello".to_string(),
            timestamp_unix_ms: 1_700_000_000_000,
            is_loading,
        }
    }

    #[test]
    fn empty_patch_changes_nothing() {
        let original = record(Some(true));
        let mut patched = original.clone();
        let patch = MessagePatch::new();
        assert!(patch.is_empty());
        patch.apply(&mut patched);
        assert_eq!(patched, original);
    }

    #[test]
    fn json_uses_front_end_field_names() {
        let value = serde_json::to_value(record(Some(true))).expect("serialize record");
        assert_eq!(value["role"], "assistant");
        assert_eq!(value["timestamp"], 1_700_000_000_000_u64);
        assert_eq!(value["isLoading"], true);

        // Settled messages omit the flag entirely.
        let settled = serde_json::to_value(record(None)).expect("serialize record");
        assert!(settled.get("isLoading").is_none());
    }
}

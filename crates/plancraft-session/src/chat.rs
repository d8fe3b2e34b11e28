//! Conversation buffer
//!
//! An append-only ordered log of exchanged messages. The log is supplied as
//! context to chat-mode assistant calls and rendered by the UI; parsing
//! never mutates it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who authored a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The editing user
    User,
    /// The remote assistant (or a surfaced system message)
    Assistant,
}

/// One exchanged message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatEntry {
    /// Message text
    pub text: String,
    /// Author
    pub sender: Sender,
    /// When it was appended
    pub timestamp: DateTime<Utc>,
}

impl ChatEntry {
    /// New user message, stamped now
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::User,
            timestamp: Utc::now(),
        }
    }

    /// New assistant message, stamped now
    #[must_use]
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::Assistant,
            timestamp: Utc::now(),
        }
    }
}

/// Append-only conversation log
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatLog(Vec<ChatEntry>);

impl ChatLog {
    /// Empty log
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a user message
    pub fn push_user(&mut self, text: impl Into<String>) {
        self.0.push(ChatEntry::user(text));
    }

    /// Append an assistant message
    pub fn push_assistant(&mut self, text: impl Into<String>) {
        self.0.push(ChatEntry::assistant(text));
    }

    /// All entries, oldest first
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[ChatEntry] {
        &self.0
    }

    /// Up to the last `window` entries, for assistant context
    #[must_use]
    pub fn recent(&self, window: usize) -> &[ChatEntry] {
        let start = self.0.len().saturating_sub(window);
        &self.0[start..]
    }

    /// Number of entries
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the log is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_preserves_order() {
        let mut log = ChatLog::new();
        log.push_user("שאלה");
        log.push_assistant("תשובה");
        log.push_user("המשך");

        let senders: Vec<Sender> = log.entries().iter().map(|e| e.sender).collect();
        assert_eq!(senders, vec![Sender::User, Sender::Assistant, Sender::User]);
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn recent_window_takes_tail() {
        let mut log = ChatLog::new();
        for i in 0..5 {
            log.push_user(format!("הודעה {i}"));
        }

        let tail = log.recent(2);
        assert_eq!(tail.len(), 2);
        assert_eq!(tail[0].text, "הודעה 3");
        assert_eq!(tail[1].text, "הודעה 4");

        // Window larger than the log takes everything
        assert_eq!(log.recent(100).len(), 5);
    }
}

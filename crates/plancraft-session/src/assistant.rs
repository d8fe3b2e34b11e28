//! Remote assistant seam
//!
//! The assistant service is a black box reached through [`AssistantClient`].
//! It answers with either an error string or a content envelope whose text
//! payload is the structural value the directive parser understands.

use crate::chat::ChatEntry;
use crate::error::SessionError;
use async_trait::async_trait;
use plancraft_directive::remap_upstream;
use serde::{Deserialize, Serialize};

/// Operation requested from the assistant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssistantOperation {
    /// Produce field-update directives
    #[serde(rename = "update_lesson_field")]
    UpdateField,
    /// Produce a conversational reply with plan context
    #[serde(rename = "chat_with_context")]
    ChatWithContext,
}

/// One assistant call
#[derive(Debug, Clone, Serialize)]
pub struct AssistantRequest {
    /// Requested operation
    pub operation: AssistantOperation,
    /// The user's message
    pub message: String,
    /// Display labels for every addressable field
    pub field_labels: Vec<(String, String)>,
    /// Current field values, path-keyed
    pub current_values: Vec<(String, String)>,
    /// Prior conversation, oldest first (chat mode only)
    pub history: Vec<ChatEntry>,
}

/// Wire envelope returned by the assistant service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssistantResponse {
    /// Upstream error, mutually exclusive with `content`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Content blocks; the first block's text is the payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<ContentBlock>>,
}

/// One content block of the envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentBlock {
    /// Wire-encoded structural payload
    pub text: String,
}

impl AssistantResponse {
    /// Envelope carrying a single text payload
    #[must_use]
    pub fn with_payload(text: impl Into<String>) -> Self {
        Self {
            error: None,
            content: Some(vec![ContentBlock { text: text.into() }]),
        }
    }

    /// Envelope carrying an upstream error
    #[must_use]
    pub fn with_error(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            content: None,
        }
    }

    /// Extract the text payload, remapping upstream errors
    ///
    /// # Errors
    /// - the remapped upstream error when the envelope carries one
    /// - [`SessionError::EmptyResponse`] when no payload text is present
    pub fn into_payload(self) -> Result<String, SessionError> {
        if let Some(raw) = self.error {
            return Err(SessionError::Directive(remap_upstream(&raw)));
        }
        self.content
            .and_then(|blocks| blocks.into_iter().next())
            .map(|block| block.text)
            .filter(|text| !text.is_empty())
            .ok_or(SessionError::EmptyResponse)
    }
}

/// Transport-level assistant failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("assistant transport error: {0}")]
pub struct AssistantError(pub String);

/// The remote assistant service
#[async_trait]
pub trait AssistantClient: Send + Sync {
    /// Relay one request and await the envelope
    async fn call(&self, request: AssistantRequest) -> Result<AssistantResponse, AssistantError>;
}

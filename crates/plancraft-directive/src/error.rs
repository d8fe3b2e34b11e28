//! Directive pipeline errors
//!
//! Every failure class carries a stable Hebrew user-facing message; raw
//! upstream text from the assistant service is never surfaced for the known
//! classes.

use plancraft_document::PathError;

/// Errors while normalizing an assistant response
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DirectiveError {
    /// Payload was not decodable into the expected structural value
    #[error("malformed assistant response")]
    MalformedResponse,

    /// A directive record is missing one of its required members
    ///
    /// Rejects the entire batch: a batch is either fully well-formed or not
    /// applied at all.
    #[error("directive batch missing required fields")]
    MissingDirectiveField,

    /// A directive addressed an invalid path
    #[error("invalid directive path '{path}': {source}")]
    InvalidPath {
        /// The offending path string
        path: String,
        /// Underlying parse failure
        source: PathError,
    },

    /// Upstream quota / resource exhaustion
    #[error("assistant service unavailable")]
    UpstreamUnavailable,

    /// Other upstream error, passed through as reported
    #[error("assistant error: {0}")]
    Upstream(String),
}

impl DirectiveError {
    /// Stable user-facing message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::MalformedResponse => {
                "התקבל מידע לא תקין מהשרת. אנא נסה שוב.".to_string()
            }
            Self::MissingDirectiveField => "תשובת המערכת חסרה שדות נדרשים".to_string(),
            Self::InvalidPath { .. } => {
                "התקבל מידע לא תקין מהשרת. אנא נסה שוב.".to_string()
            }
            Self::UpstreamUnavailable => {
                "מצטער, המערכת לא זמינה כרגע. אנא נסה שוב מאוחר יותר או פנה למנהל המערכת."
                    .to_string()
            }
            Self::Upstream(message) => message.clone(),
        }
    }
}

/// Classify a raw upstream error string into the fixed taxonomy
///
/// Known upstream classes are remapped so their raw text never reaches the
/// user; anything unrecognized passes through.
#[must_use]
pub fn remap_upstream(raw: &str) -> DirectiveError {
    if raw.contains("Resource has been exhausted") || raw.contains("quota") {
        DirectiveError::UpstreamUnavailable
    } else if raw.contains("Invalid response format") {
        DirectiveError::MalformedResponse
    } else {
        DirectiveError::Upstream(raw.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quota_errors_remap_to_unavailable() {
        assert_eq!(
            remap_upstream("Resource has been exhausted (e.g. check quota)."),
            DirectiveError::UpstreamUnavailable
        );
        assert_eq!(
            remap_upstream("429: quota exceeded"),
            DirectiveError::UpstreamUnavailable
        );
    }

    #[test]
    fn invalid_format_remaps_to_malformed() {
        assert_eq!(
            remap_upstream("Invalid response format from server"),
            DirectiveError::MalformedResponse
        );
    }

    #[test]
    fn unknown_upstream_passes_through() {
        let err = remap_upstream("socket hang up");
        assert_eq!(err, DirectiveError::Upstream("socket hang up".to_string()));
        assert_eq!(err.user_message(), "socket hang up");
    }

    #[test]
    fn known_classes_have_stable_messages() {
        assert!(DirectiveError::UpstreamUnavailable
            .user_message()
            .contains("המערכת לא זמינה"));
        assert!(DirectiveError::MalformedResponse
            .user_message()
            .contains("מידע לא תקין"));
    }
}

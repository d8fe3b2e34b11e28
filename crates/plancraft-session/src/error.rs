//! Session-level errors

use crate::store::StoreError;
use plancraft_directive::DirectiveError;

/// Errors surfaced by an editing session
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// Assistant response could not be normalized
    #[error(transparent)]
    Directive(#[from] DirectiveError),

    /// Persisting the snapshot failed
    #[error("save failed: {0}")]
    Persist(StoreError),

    /// Loading a plan failed
    #[error("load failed: {0}")]
    Load(StoreError),

    /// Assistant returned neither an error nor content
    #[error("empty assistant response")]
    EmptyResponse,
}

impl SessionError {
    /// Stable user-facing message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Directive(err) => err.user_message(),
            Self::Persist(_) => "שגיאה בשמירת התוכנית".to_string(),
            Self::Load(_) => "שגיאה בטעינת התוכנית".to_string(),
            Self::EmptyResponse => "לא התקבלה תשובה מהשרת. אנא נסה שוב.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directive_messages_delegate() {
        let err = SessionError::Directive(DirectiveError::MissingDirectiveField);
        assert_eq!(err.user_message(), "תשובת המערכת חסרה שדות נדרשים");
    }

    #[test]
    fn store_failures_never_leak_backend_text() {
        let err = SessionError::Persist(StoreError::Backend("ECONNREFUSED 10.0.0.3".into()));
        assert_eq!(err.user_message(), "שגיאה בשמירת התוכנית");
    }
}

//! Validated field directives
//!
//! A [`Directive`] is the normalized unit of assistant intent: a typed
//! target path, a canonicalized replacement value, and the assistant's own
//! explanation of the change. Directives are consumed immediately by the
//! synthesizer and the mutation engine and are never persisted.

use plancraft_document::{labels, FieldEdit, FieldPath};

/// One validated (path, value, explanation) triple
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    /// Target path
    pub path: FieldPath,
    /// Replacement value, already canonicalized
    pub value: String,
    /// Human-readable explanation, echoed into the conversation
    pub note: String,
}

impl Directive {
    /// Create a new directive
    #[inline]
    #[must_use]
    pub fn new(path: FieldPath, value: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            path,
            value: value.into(),
            note: note.into(),
        }
    }

    /// Display label of the targeted field, for chat echo
    #[must_use]
    pub fn field_label(&self) -> String {
        labels::field_display_label(&self.path)
    }

    /// Convert into a mutation-engine edit, dropping the explanation
    #[inline]
    #[must_use]
    pub fn into_edit(self) -> FieldEdit {
        FieldEdit::new(self.path, self.value)
    }
}

//! Session configuration

use plancraft_directive::DEFAULT_CREATION_CUES;
use serde::{Deserialize, Serialize};

/// Tunable behavior of an editing session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Persist automatically after a directive batch mutates the plan
    pub autosave_after_directives: bool,
    /// Lexical markers that gate new-activity synthesis
    pub creation_cues: Vec<String>,
    /// How many trailing chat entries accompany a chat-mode request
    pub history_window: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            autosave_after_directives: true,
            creation_cues: DEFAULT_CREATION_CUES
                .iter()
                .map(|cue| (*cue).to_string())
                .collect(),
            history_window: 20,
        }
    }
}

impl SessionConfig {
    /// Default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set autosave behavior
    #[must_use]
    pub fn with_autosave(mut self, enabled: bool) -> Self {
        self.autosave_after_directives = enabled;
        self
    }

    /// Replace the creation cues
    #[must_use]
    pub fn with_creation_cues(mut self, cues: Vec<String>) -> Self {
        self.creation_cues = cues;
        self
    }

    /// Set the chat history window
    #[must_use]
    pub fn with_history_window(mut self, window: usize) -> Self {
        self.history_window = window;
        self
    }
}

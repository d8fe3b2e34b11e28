//! The editing session
//!
//! One [`PlanSession`] owns a working snapshot of a lesson plan, the
//! conversation log around it, and the plumbing to the assistant and the
//! store. Every assistant-driven mutation is atomic against the snapshot:
//! either the whole directive batch lands or nothing does.

use crate::assistant::{AssistantClient, AssistantOperation, AssistantRequest};
use crate::chat::ChatLog;
use crate::config::SessionConfig;
use crate::error::SessionError;
use crate::persist::{SaveCoordinator, SaveOutcome};
use crate::store::PlanStore;
use chrono::{DateTime, Utc};
use plancraft_directive::{parser, ParseMode, ParsedResponse};
use plancraft_document::{labels, mutation, LessonPlan, Phase, PlanId, TopLevelField};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// An interactive editing session over one lesson plan
pub struct PlanSession {
    config: SessionConfig,
    assistant: Arc<dyn AssistantClient>,
    coordinator: SaveCoordinator,
    plan_id: Option<PlanId>,
    snapshot: LessonPlan,
    log: ChatLog,
    unsaved: bool,
    last_saved: Option<DateTime<Utc>>,
}

impl PlanSession {
    /// Fresh session over an empty plan, not yet persisted
    #[must_use]
    pub fn new(
        user_id: impl Into<String>,
        assistant: Arc<dyn AssistantClient>,
        store: Arc<dyn PlanStore>,
    ) -> Self {
        Self::with_config(user_id, assistant, store, SessionConfig::default())
    }

    /// Fresh session with explicit configuration
    #[must_use]
    pub fn with_config(
        user_id: impl Into<String>,
        assistant: Arc<dyn AssistantClient>,
        store: Arc<dyn PlanStore>,
        config: SessionConfig,
    ) -> Self {
        Self {
            config,
            assistant,
            coordinator: SaveCoordinator::new(store),
            plan_id: None,
            snapshot: LessonPlan::empty(user_id),
            log: ChatLog::new(),
            unsaved: false,
            last_saved: None,
        }
    }

    /// Open a session over a stored plan
    ///
    /// # Errors
    /// [`SessionError::Load`] on store failure or when the id is absent.
    pub async fn open(
        id: PlanId,
        assistant: Arc<dyn AssistantClient>,
        store: Arc<dyn PlanStore>,
        config: SessionConfig,
    ) -> Result<Self, SessionError> {
        let stored = store
            .get_by_id(id)
            .await
            .map_err(SessionError::Load)?
            .ok_or(SessionError::Load(crate::store::StoreError::NotFound(id)))?;

        info!(plan_id = %stored.id, topic = %stored.plan.topic, "opened stored plan");
        Ok(Self {
            config,
            assistant,
            coordinator: SaveCoordinator::new(store),
            plan_id: Some(stored.id),
            snapshot: stored.plan,
            log: ChatLog::new(),
            unsaved: false,
            last_saved: Some(stored.updated_at),
        })
    }

    /// Resume the user's most recent plan, or start a fresh one
    ///
    /// # Errors
    /// [`SessionError::Load`] on store failure while listing.
    pub async fn open_most_recent_or_create(
        user_id: &str,
        assistant: Arc<dyn AssistantClient>,
        store: Arc<dyn PlanStore>,
        config: SessionConfig,
    ) -> Result<Self, SessionError> {
        let mut plans = store
            .list_for_user(user_id)
            .await
            .map_err(SessionError::Load)?;

        if plans.is_empty() {
            debug!(user_id, "no stored plans, starting fresh");
            return Ok(Self::with_config(user_id, assistant, store, config));
        }

        let stored = plans.remove(0);
        info!(plan_id = %stored.id, user_id, "resumed most recent plan");
        Ok(Self {
            config,
            assistant,
            coordinator: SaveCoordinator::new(store),
            plan_id: Some(stored.id),
            snapshot: stored.plan,
            log: ChatLog::new(),
            unsaved: false,
            last_saved: Some(stored.updated_at),
        })
    }

    /// Current working snapshot
    #[inline]
    #[must_use]
    pub fn snapshot(&self) -> &LessonPlan {
        &self.snapshot
    }

    /// Store id, absent until the first successful save
    #[inline]
    #[must_use]
    pub fn plan_id(&self) -> Option<PlanId> {
        self.plan_id
    }

    /// When the last successful save completed
    #[inline]
    #[must_use]
    pub fn last_saved(&self) -> Option<DateTime<Utc>> {
        self.last_saved
    }

    /// Whether the snapshot has diverged from the stored document
    #[inline]
    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved
    }

    /// The conversation log
    #[inline]
    #[must_use]
    pub fn log(&self) -> &ChatLog {
        &self.log
    }

    /// Apply raw string-addressed edits from the editing surface
    ///
    /// Invalid paths are skipped and reported; valid ones still land.
    /// Returns the number of edits applied.
    pub fn apply_field_updates(&mut self, edits: &[(String, String)]) -> usize {
        let outcome = mutation::apply_raw(&self.snapshot, edits);
        for rejected in &outcome.rejected {
            warn!(path = %rejected.path, error = %rejected.error, "skipped invalid edit");
        }
        if outcome.applied > 0 {
            self.snapshot = outcome.snapshot;
            self.unsaved = true;
        }
        outcome.applied
    }

    /// Append a blank activity to a phase
    pub fn add_activity(&mut self, phase: Phase) {
        self.snapshot.sections.phase_mut(phase).push(Default::default());
        self.unsaved = true;
    }

    /// Remove the activity at `index`, if present
    pub fn remove_activity(&mut self, phase: Phase, index: usize) -> bool {
        let activities = self.snapshot.sections.phase_mut(phase);
        if index < activities.len() {
            activities.remove(index);
            self.unsaved = true;
            true
        } else {
            false
        }
    }

    /// Persist the working snapshot
    ///
    /// Single-flight: a save while another is in flight is dropped and the
    /// snapshot stays dirty. On failure the snapshot and dirty flag are
    /// untouched so nothing is lost.
    ///
    /// # Errors
    /// [`SessionError::Persist`] wrapping the store failure.
    pub async fn save(&mut self) -> Result<SaveOutcome, SessionError> {
        let outcome = self
            .coordinator
            .save(self.plan_id, &self.snapshot)
            .await
            .map_err(SessionError::Persist)?;

        if let SaveOutcome::Saved { id, at } = outcome {
            self.plan_id = Some(id);
            self.last_saved = Some(at);
            self.unsaved = false;
            info!(plan_id = %id, "plan saved");
        } else {
            debug!("save dropped, another save in flight");
        }
        Ok(outcome)
    }

    /// Send a user message through the assistant pipeline
    ///
    /// Command mode may mutate the snapshot; chat mode never does. Every
    /// path, success or failure, appends to the conversation log so the
    /// user always sees an answer.
    ///
    /// # Errors
    /// Any pipeline failure; its `user_message` has already been appended
    /// to the log.
    pub async fn send_message(
        &mut self,
        text: &str,
        mode: ParseMode,
    ) -> Result<(), SessionError> {
        self.log.push_user(text);
        match self.dispatch(text, mode).await {
            Ok(()) => Ok(()),
            Err(err) => {
                warn!(error = %err, "assistant pipeline failed");
                self.log.push_assistant(err.user_message());
                Err(err)
            }
        }
    }

    async fn dispatch(&mut self, text: &str, mode: ParseMode) -> Result<(), SessionError> {
        let request = self.build_request(text, mode);
        let response = self
            .assistant
            .call(request)
            .await
            .map_err(|e| SessionError::Directive(plancraft_directive::remap_upstream(&e.0)))?;
        let payload = response.into_payload()?;

        match parser::parse(&payload, mode)? {
            ParsedResponse::Chat(reply) => {
                self.log.push_assistant(reply);
                Ok(())
            }
            ParsedResponse::Directives(directives) => {
                self.apply_directives(directives, text).await
            }
        }
    }

    async fn apply_directives(
        &mut self,
        directives: Vec<plancraft_directive::Directive>,
        trigger_text: &str,
    ) -> Result<(), SessionError> {
        let notes: Vec<String> = directives.iter().map(|d| d.note.clone()).collect();
        let partition =
            plancraft_directive::synthesize::partition(directives, trigger_text, &self.config.creation_cues);

        if partition.is_empty() {
            return Ok(());
        }

        // Build the next snapshot fully before committing anything
        let mut next = self.snapshot.clone();
        for draft in &partition.new_activities {
            next.sections.phase_mut(draft.phase).push(draft.activity.clone());
        }
        let edits: Vec<_> = partition.edits.into_iter().map(|d| d.into_edit()).collect();
        next = mutation::apply(&next, &edits);

        debug!(
            new_activities = partition.new_activities.len(),
            edits = edits.len(),
            "directive batch applied"
        );
        self.snapshot = next;
        self.unsaved = true;

        for note in notes {
            self.log.push_assistant(note);
        }

        if self.config.autosave_after_directives {
            // Autosave failure is surfaced but the mutation stays applied
            self.save().await?;
        }
        Ok(())
    }

    fn build_request(&self, text: &str, mode: ParseMode) -> AssistantRequest {
        let history = match mode {
            ParseMode::Chat => self.log.recent(self.config.history_window).to_vec(),
            ParseMode::Command => Vec::new(),
        };
        AssistantRequest {
            operation: match mode {
                ParseMode::Command => AssistantOperation::UpdateField,
                ParseMode::Chat => AssistantOperation::ChatWithContext,
            },
            message: text.to_string(),
            field_labels: labels::field_label_table(),
            current_values: self.current_values(),
            history,
        }
    }

    /// Path-keyed values the assistant needs to ground its directives:
    /// every top-level field plus the leading activity of each phase.
    fn current_values(&self) -> Vec<(String, String)> {
        let mut values: Vec<(String, String)> = TopLevelField::ALL
            .iter()
            .map(|field| {
                (
                    field.as_str().to_string(),
                    self.snapshot.top_level(*field).to_string(),
                )
            })
            .collect();

        for phase in Phase::ALL {
            if let Some(first) = self.snapshot.sections.phase(phase).first() {
                values.push((format!("{}.0.content", phase.as_str()), first.content.clone()));
                values.push((
                    format!("{}.0.spaceUsage", phase.as_str()),
                    first.space_usage.clone(),
                ));
            }
        }
        values
    }
}

impl std::fmt::Debug for PlanSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlanSession")
            .field("plan_id", &self.plan_id)
            .field("unsaved", &self.unsaved)
            .field("log_len", &self.log.len())
            .finish_non_exhaustive()
    }
}

//! Save coordination
//!
//! Serializes persistence so at most one save is in flight at a time.
//! A save requested while another is running is dropped, not queued; the
//! caller keeps its dirty flag and retries later with the newer snapshot.

use crate::store::{PlanStore, StoreError};
use chrono::{DateTime, Utc};
use plancraft_document::{LessonPlan, PlanId};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// What a save request produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Snapshot persisted
    Saved {
        /// Id of the stored plan (store-assigned on first save)
        id: PlanId,
        /// When the store acknowledged
        at: DateTime<Utc>,
    },
    /// Another save was already running; this request was dropped
    AlreadyInFlight,
}

/// Single-flight gate in front of a [`PlanStore`]
///
/// Shared by reference across tasks; the gate is an atomic flag, not a
/// lock, so a concurrent request returns immediately instead of waiting.
pub struct SaveCoordinator {
    store: Arc<dyn PlanStore>,
    in_flight: AtomicBool,
    last_saved: Mutex<Option<DateTime<Utc>>>,
}

impl SaveCoordinator {
    /// Coordinator over the given store
    #[must_use]
    pub fn new(store: Arc<dyn PlanStore>) -> Self {
        Self {
            store,
            in_flight: AtomicBool::new(false),
            last_saved: Mutex::new(None),
        }
    }

    /// Whether a save is currently running
    #[inline]
    #[must_use]
    pub fn is_saving(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// When the last successful save completed
    #[must_use]
    pub fn last_saved(&self) -> Option<DateTime<Utc>> {
        *self
            .last_saved
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Persist a snapshot, creating the plan when it has no id yet
    ///
    /// Returns [`SaveOutcome::AlreadyInFlight`] without touching the store
    /// if another save holds the gate. The gate is released on every exit,
    /// including store failure.
    ///
    /// # Errors
    /// Returns the store's error unchanged; the caller decides how to
    /// surface it.
    pub async fn save(
        &self,
        id: Option<PlanId>,
        snapshot: &LessonPlan,
    ) -> Result<SaveOutcome, StoreError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Ok(SaveOutcome::AlreadyInFlight);
        }

        let result = match id {
            Some(id) => self.store.update(id, snapshot).await,
            None => self.store.create(snapshot).await,
        };
        self.in_flight.store(false, Ordering::Release);

        let stored = result?;
        *self
            .last_saved
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(stored.updated_at);

        Ok(SaveOutcome::Saved {
            id: stored.id,
            at: stored.updated_at,
        })
    }
}

impl std::fmt::Debug for SaveCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SaveCoordinator")
            .field("in_flight", &self.is_saving())
            .field("last_saved", &self.last_saved())
            .finish_non_exhaustive()
    }
}

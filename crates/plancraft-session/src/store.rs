//! Persistence store seam
//!
//! The backing store is an external collaborator keyed by plan id. The core
//! treats every operation as fallible and never retries on its own.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use plancraft_document::{LessonPlan, PlanId};
use serde::{Deserialize, Serialize};

/// A plan as the store returns it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredPlan {
    /// Store-assigned id
    pub id: PlanId,
    /// The document
    pub plan: LessonPlan,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last update time
    pub updated_at: DateTime<Utc>,
}

/// Store failures
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No plan with the given id
    #[error("plan not found: {0}")]
    NotFound(PlanId),

    /// Backend-reported failure
    #[error("store backend error: {0}")]
    Backend(String),
}

/// Document store keyed by plan id
#[async_trait]
pub trait PlanStore: Send + Sync {
    /// Fetch one plan, `None` if absent
    async fn get_by_id(&self, id: PlanId) -> Result<Option<StoredPlan>, StoreError>;

    /// All plans of a user, most recently created first
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<StoredPlan>, StoreError>;

    /// Persist a new plan, assigning its id
    async fn create(&self, plan: &LessonPlan) -> Result<StoredPlan, StoreError>;

    /// Replace the stored document
    async fn update(&self, id: PlanId, plan: &LessonPlan) -> Result<StoredPlan, StoreError>;

    /// Remove a plan
    async fn delete(&self, id: PlanId) -> Result<(), StoreError>;
}

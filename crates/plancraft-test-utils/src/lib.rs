//! Testing utilities for the plancraft workspace
//!
//! Scripted doubles for the two external seams plus plan fixtures.

#![allow(missing_docs)]

use async_trait::async_trait;
use chrono::Utc;
use plancraft_document::{LessonPlan, PlanId};
use plancraft_session::{
    AssistantClient, AssistantError, AssistantRequest, AssistantResponse, PlanStore, StoreError,
    StoredPlan,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;

/// In-memory [`PlanStore`] with call counters and failure/latency switches
#[derive(Default)]
pub struct MemoryStore {
    plans: Mutex<HashMap<PlanId, StoredPlan>>,
    pub create_calls: AtomicUsize,
    pub update_calls: AtomicUsize,
    fail_writes: AtomicBool,
    write_delay: Mutex<Option<Duration>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent create/update calls fail
    pub fn fail_writes(&self, enabled: bool) {
        self.fail_writes.store(enabled, Ordering::SeqCst);
    }

    /// Delay every write, to hold the save gate open in tests
    pub async fn set_write_delay(&self, delay: Duration) {
        *self.write_delay.lock().await = Some(delay);
    }

    /// Seed a stored plan directly, returning its id
    pub async fn seed(&self, plan: LessonPlan) -> PlanId {
        let id = PlanId::new();
        let now = Utc::now();
        self.plans.lock().await.insert(
            id,
            StoredPlan {
                id,
                plan,
                created_at: now,
                updated_at: now,
            },
        );
        id
    }

    pub async fn stored(&self, id: PlanId) -> Option<StoredPlan> {
        self.plans.lock().await.get(&id).cloned()
    }

    async fn write_gate(&self) -> Result<(), StoreError> {
        let delay = *self.write_delay.lock().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Backend("simulated write failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl PlanStore for MemoryStore {
    async fn get_by_id(&self, id: PlanId) -> Result<Option<StoredPlan>, StoreError> {
        Ok(self.plans.lock().await.get(&id).cloned())
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<StoredPlan>, StoreError> {
        let mut plans: Vec<StoredPlan> = self
            .plans
            .lock()
            .await
            .values()
            .filter(|stored| stored.plan.user_id == user_id)
            .cloned()
            .collect();
        plans.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(plans)
    }

    async fn create(&self, plan: &LessonPlan) -> Result<StoredPlan, StoreError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.write_gate().await?;
        let id = PlanId::new();
        let now = Utc::now();
        let stored = StoredPlan {
            id,
            plan: plan.clone(),
            created_at: now,
            updated_at: now,
        };
        self.plans.lock().await.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, id: PlanId, plan: &LessonPlan) -> Result<StoredPlan, StoreError> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        self.write_gate().await?;
        let mut plans = self.plans.lock().await;
        let stored = plans.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        stored.plan = plan.clone();
        stored.updated_at = Utc::now();
        Ok(stored.clone())
    }

    async fn delete(&self, id: PlanId) -> Result<(), StoreError> {
        self.plans
            .lock()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }
}

/// [`AssistantClient`] replaying a fixed script of responses in order
#[derive(Default)]
pub struct ScriptedAssistant {
    script: Mutex<Vec<Result<AssistantResponse, AssistantError>>>,
    pub calls: AtomicUsize,
    pub requests: Mutex<Vec<AssistantRequest>>,
}

impl ScriptedAssistant {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-response script carrying a text payload
    pub fn with_payload(text: impl Into<String>) -> Self {
        Self {
            script: Mutex::new(vec![Ok(AssistantResponse::with_payload(text))]),
            ..Self::default()
        }
    }

    /// Single-response script carrying an upstream error
    pub fn with_error(message: impl Into<String>) -> Self {
        Self {
            script: Mutex::new(vec![Ok(AssistantResponse::with_error(message))]),
            ..Self::default()
        }
    }

    /// Queue another scripted response
    pub async fn push(&self, response: Result<AssistantResponse, AssistantError>) {
        self.script.lock().await.push(response);
    }
}

#[async_trait]
impl AssistantClient for ScriptedAssistant {
    async fn call(&self, request: AssistantRequest) -> Result<AssistantResponse, AssistantError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().await.push(request);
        let mut script = self.script.lock().await;
        if script.is_empty() {
            return Err(AssistantError("scripted assistant exhausted".to_string()));
        }
        script.remove(0)
    }
}

/// A plan with a topic and one activity per phase
pub fn sample_plan(user_id: &str) -> LessonPlan {
    let mut plan = LessonPlan::empty(user_id);
    plan.topic = "מערכת השמש".to_string();
    plan.duration = "45 דקות".to_string();
    plan.grade_level = "כיתה ה".to_string();

    for phase in plancraft_document::Phase::ALL {
        let activities = plan.sections.phase_mut(phase);
        activities.push(plancraft_document::Activity {
            content: format!("פעילות {}", phase.as_str()),
            space_usage: "whole".to_string(),
            ..Default::default()
        });
    }
    plan
}

/// JSON payload of a single directive record
pub fn directive_payload(field: &str, value: &str, chat: &str) -> String {
    format!(r#"{{"field": "{field}", "value": "{value}", "chat": "{chat}"}}"#)
}

//! Plancraft editing session
//!
//! Ties the document model and the directive pipeline to the outside world:
//! the remote assistant, the persistence store and the conversation log.
//!
//! # Core Concepts
//!
//! - [`PlanSession`]: one user's editing session over one plan snapshot
//! - [`AssistantClient`] / [`PlanStore`]: the two external seams, both
//!   async traits so tests can script them
//! - [`SaveCoordinator`]: single-flight persistence gate
//! - [`ChatLog`]: append-only conversation buffer
//!
//! # Example
//!
//! ```rust,ignore
//! let mut session = PlanSession::new("teacher-1", assistant, store);
//! session.send_message("הוסף פעילות פתיחה עם חידה", ParseMode::Command).await?;
//! assert!(!session.snapshot().sections.opening.is_empty());
//! ```

#![warn(unreachable_pub)]

pub mod assistant;
mod chat;
mod config;
mod error;
pub mod persist;
mod session;
pub mod store;

pub use assistant::{AssistantClient, AssistantError, AssistantRequest, AssistantResponse};
pub use chat::{ChatEntry, ChatLog, Sender};
pub use config::SessionConfig;
pub use error::SessionError;
pub use persist::{SaveCoordinator, SaveOutcome};
pub use session::PlanSession;
pub use store::{PlanStore, StoreError, StoredPlan};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

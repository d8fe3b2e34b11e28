//! Plancraft document model
//!
//! The lesson-plan aggregate with stable path addressing and a pure
//! copy-on-write mutation engine.
//!
//! # Core Concepts
//!
//! - [`LessonPlan`]: the document aggregate — scalar top-level fields plus
//!   three fixed phases of ordered, fully-shaped activities
//! - [`FieldPath`]: the closed dotted-path grammar addressing any field
//! - [`mutation::apply`]: batch edits producing a new snapshot, growing
//!   phases on demand
//! - [`labels`]: fixed bidirectional tables between localized display labels
//!   and canonical codes
//!
//! # Example
//!
//! ```rust
//! use plancraft_document::{mutation, FieldEdit, LessonPlan};
//!
//! let base = LessonPlan::empty("user-1");
//! let next = mutation::apply(
//!     &base,
//!     &[FieldEdit::new("main.0.content".parse().unwrap(), "תרגול בזוגות")],
//! );
//! assert_eq!(next.sections.main[0].content, "תרגול בזוגות");
//! ```

#![warn(unreachable_pub)]

pub mod export;
pub mod labels;
mod model;
pub mod mutation;
mod path;

pub use model::{Activity, LessonPlan, Phase, PlanId, Sections};
pub use mutation::{FieldEdit, MutationOutcome, RejectedEdit};
pub use path::{
    ActivityField, FieldPath, PathError, ScreenSlot, TopLevelField, MAX_ACTIVITY_INDEX,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

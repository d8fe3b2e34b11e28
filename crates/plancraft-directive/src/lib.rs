//! Plancraft directive pipeline
//!
//! Turns heterogeneous, occasionally malformed assistant responses into
//! either a conversational reply or a validated batch of atomic field
//! directives, and decides which directive groups synthesize brand-new
//! activities.
//!
//! # Core Concepts
//!
//! - [`parser::parse`]: wire payload → [`ParsedResponse`], all-or-nothing
//!   per batch
//! - [`Directive`]: validated (path, value, explanation) triple
//! - [`synthesize::partition`]: splits a batch into activities to append
//!   and plain in-place edits
//! - [`DirectiveError`]: the failure taxonomy with stable user-facing
//!   messages

#![warn(unreachable_pub)]

mod directive;
mod error;
pub mod parser;
pub mod synthesize;

pub use directive::Directive;
pub use error::{remap_upstream, DirectiveError};
pub use parser::{ParseMode, ParsedResponse};
pub use synthesize::{DraftActivity, Partition, DEFAULT_CREATION_CUES};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

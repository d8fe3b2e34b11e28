//! Copy-on-write mutation engine
//!
//! Applies a batch of (path, value) edits to a snapshot, producing a new
//! snapshot. Section edits grow the target phase with default-shaped
//! activities on demand; growth is monotonic and never truncates or reorders
//! what is already there. The engine itself is pure — commit semantics live
//! with the snapshot's owner.

use crate::model::{Activity, LessonPlan};
use crate::path::{FieldPath, PathError};

/// One typed edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEdit {
    /// Target path
    pub path: FieldPath,
    /// Replacement value
    pub value: String,
}

impl FieldEdit {
    /// Create a new edit
    #[inline]
    #[must_use]
    pub fn new(path: FieldPath, value: impl Into<String>) -> Self {
        Self {
            path,
            value: value.into(),
        }
    }
}

/// A raw edit whose path failed to parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedEdit {
    /// The offending path string
    pub path: String,
    /// Why it was rejected
    pub error: PathError,
}

/// Result of applying a raw (string-addressed) batch
#[derive(Debug, Clone)]
pub struct MutationOutcome {
    /// The new snapshot
    pub snapshot: LessonPlan,
    /// Number of edits applied
    pub applied: usize,
    /// Edits skipped for invalid paths, in input order
    pub rejected: Vec<RejectedEdit>,
}

impl MutationOutcome {
    /// Whether every edit in the batch applied
    #[inline]
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Apply typed edits to a snapshot, in input order
///
/// Pure: the input snapshot is never mutated. Edits within one batch compose
/// against the growing copy, so an edit that grows a phase followed by an
/// edit into the grown range succeeds.
#[must_use]
pub fn apply(base: &LessonPlan, edits: &[FieldEdit]) -> LessonPlan {
    edits.iter().fold(base.clone(), |mut plan, edit| {
        apply_one(&mut plan, edit);
        plan
    })
}

/// Apply string-addressed edits, skipping and recording invalid paths
///
/// The valid remainder of the batch still applies; whole-batch atomicity for
/// assistant directives is enforced before edits ever reach the engine.
#[must_use]
pub fn apply_raw(base: &LessonPlan, edits: &[(String, String)]) -> MutationOutcome {
    let mut snapshot = base.clone();
    let mut applied = 0;
    let mut rejected = Vec::new();

    for (raw_path, value) in edits {
        match raw_path.parse::<FieldPath>() {
            Ok(path) => {
                apply_one(&mut snapshot, &FieldEdit::new(path, value.clone()));
                applied += 1;
            }
            Err(error) => rejected.push(RejectedEdit {
                path: raw_path.clone(),
                error,
            }),
        }
    }

    MutationOutcome {
        snapshot,
        applied,
        rejected,
    }
}

fn apply_one(plan: &mut LessonPlan, edit: &FieldEdit) {
    match edit.path {
        FieldPath::TopLevel(field) => plan.set_top_level(field, edit.value.clone()),
        FieldPath::Section { phase, index, field } => {
            let activities = plan.sections.phase_mut(phase);
            while activities.len() <= index {
                activities.push(Activity::default());
            }
            activities[index].set_field(field, edit.value.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Phase;
    use crate::path::{ActivityField, TopLevelField};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn edit(path: &str, value: &str) -> FieldEdit {
        FieldEdit::new(path.parse().unwrap(), value)
    }

    #[test]
    fn top_level_edit_replaces_only_that_field() {
        let mut base = LessonPlan::empty("u");
        base.topic = "ישן".to_string();
        base.duration = "45 דקות".to_string();

        let next = apply(&base, &[edit("topic", "חדש")]);

        assert_eq!(next.topic, "חדש");
        assert_eq!(next.duration, "45 דקות");
        assert_eq!(base.topic, "ישן"); // input untouched
    }

    #[test]
    fn section_edit_grows_phase_with_default_shapes() {
        let base = LessonPlan::empty("u");
        let next = apply(&base, &[edit("main.2.content", "משחק תפקידים")]);

        assert_eq!(next.sections.main.len(), 3);
        assert!(next.sections.main[0].is_blank());
        assert!(next.sections.main[1].is_blank());
        assert_eq!(next.sections.main[2].content, "משחק תפקידים");
        assert_eq!(next.sections.main[2].space_usage, "");
        assert!(base.sections.main.is_empty());
    }

    #[test]
    fn growth_preserves_existing_activities() {
        let mut base = LessonPlan::empty("u");
        base.sections.opening.push(Activity {
            content: "חידה".to_string(),
            ..Activity::default()
        });

        let next = apply(&base, &[edit("opening.2.spaceUsage", "groups")]);

        assert_eq!(next.sections.opening.len(), 3);
        assert_eq!(next.sections.opening[0].content, "חידה");
        assert_eq!(next.sections.opening[2].space_usage, "groups");
    }

    #[test]
    fn edits_in_one_batch_compose_in_order() {
        let base = LessonPlan::empty("u");
        let next = apply(
            &base,
            &[
                edit("summary.2.content", "סיכום"),
                edit("summary.2.screen1", "video"),
                edit("summary.0.content", "דיון"),
            ],
        );

        assert_eq!(next.sections.summary.len(), 3);
        assert_eq!(next.sections.summary[2].content, "סיכום");
        assert_eq!(next.sections.summary[2].screen1, "video");
        assert_eq!(next.sections.summary[0].content, "דיון");
    }

    #[test]
    fn later_edit_wins_on_same_path() {
        let base = LessonPlan::empty("u");
        let next = apply(&base, &[edit("topic", "א"), edit("topic", "ב")]);
        assert_eq!(next.topic, "ב");
    }

    #[test]
    fn batch_is_idempotent() {
        let base = LessonPlan::empty("u");
        let batch = vec![
            edit("topic", "שברים"),
            edit("main.1.content", "תרגול"),
            edit("main.1.spaceUsage", "individual"),
        ];

        let once = apply(&base, &batch);
        let twice = apply(&once, &batch);
        assert_eq!(once, twice);
    }

    #[test]
    fn raw_batch_skips_and_records_invalid_paths() {
        let base = LessonPlan::empty("u");
        let outcome = apply_raw(
            &base,
            &[
                ("topic".to_string(), "נושא".to_string()),
                ("sideways".to_string(), "x".to_string()),
                ("opening.0.content".to_string(), "פתיחה".to_string()),
            ],
        );

        assert_eq!(outcome.applied, 2);
        assert_eq!(outcome.rejected.len(), 1);
        assert_eq!(outcome.rejected[0].path, "sideways");
        assert!(!outcome.is_clean());
        assert_eq!(outcome.snapshot.topic, "נושא");
        assert_eq!(outcome.snapshot.sections.opening[0].content, "פתיחה");
    }

    #[test]
    fn oversized_index_is_rejected_not_grown() {
        let base = LessonPlan::empty("u");
        let outcome = apply_raw(
            &base,
            &[("main.4000000000.content".to_string(), "x".to_string())],
        );

        assert_eq!(outcome.applied, 0);
        assert_eq!(outcome.rejected.len(), 1);
        assert!(matches!(outcome.rejected[0].error, PathError::InvalidIndex(_)));
        assert!(outcome.snapshot.sections.main.is_empty());
    }

    #[test]
    fn empty_batch_is_identity() {
        let mut base = LessonPlan::empty("u");
        base.topic = "נושא".to_string();
        assert_eq!(apply(&base, &[]), base);
    }

    proptest! {
        #[test]
        fn growth_reaches_exactly_index_plus_one(index in 0usize..16) {
            let base = LessonPlan::empty("u");
            let path = FieldPath::section(Phase::Main, index, ActivityField::Content);
            let next = apply(&base, &[FieldEdit::new(path, "x")]);

            prop_assert_eq!(next.sections.main.len(), index + 1);
            prop_assert_eq!(next.sections.main[index].content.as_str(), "x");
            for i in 0..index {
                prop_assert!(next.sections.main[i].is_blank());
            }
        }

        #[test]
        fn top_level_apply_sets_value(value in "\\PC{0,40}") {
            let base = LessonPlan::empty("u");
            let next = apply(
                &base,
                &[FieldEdit::new(FieldPath::TopLevel(TopLevelField::Duration), value.clone())],
            );
            prop_assert_eq!(next.duration, value);
            prop_assert_eq!(&next.topic, &base.topic);
        }
    }
}

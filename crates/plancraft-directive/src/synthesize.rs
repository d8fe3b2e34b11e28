//! Entity synthesis from directive batches
//!
//! Decides whether a batch of directives describes edits to existing
//! activities or the creation of brand-new ones. A (phase, index) group is
//! synthesized into a complete activity only when the triggering message
//! contains a creation cue and the group carries content or a spatial
//! arrangement; otherwise the group's directives flow through as plain
//! in-place edits.

use crate::directive::Directive;
use indexmap::IndexMap;
use plancraft_document::{Activity, FieldPath, Phase};

/// Lexical markers that signal "add an activity" intent
pub const DEFAULT_CREATION_CUES: [&str; 3] =
    ["הוסף פעילות", "צור פעילות", "פעילות חדשה"];

/// A fully-shaped activity synthesized from a directive group
///
/// Synthesis is append-only: the activity is added to the end of its phase,
/// never written over whatever occupies the addressed index, because the
/// triggering intent is "add an activity", not "edit one".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftActivity {
    /// Target phase
    pub phase: Phase,
    /// The index the directives addressed, kept for echo only
    pub source_index: usize,
    /// The complete activity; absent fields defaulted to empty
    pub activity: Activity,
}

/// Result of partitioning a directive batch
///
/// New activities come first so a later plain edit in the same batch can
/// target the index just created.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    /// Activities to append, in group order
    pub new_activities: Vec<DraftActivity>,
    /// Directives to apply as in-place edits, in input order
    pub edits: Vec<Directive>,
}

impl Partition {
    /// Whether the batch produced anything at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.new_activities.is_empty() && self.edits.is_empty()
    }
}

/// Partition a directive batch against its triggering message
#[must_use]
pub fn partition(directives: Vec<Directive>, trigger_text: &str, cues: &[String]) -> Partition {
    let creating = cues.iter().any(|cue| trigger_text.contains(cue.as_str()));

    let mut groups: IndexMap<(Phase, usize), Vec<Directive>> = IndexMap::new();
    let mut edits = Vec::new();

    for directive in directives {
        match directive.path {
            FieldPath::Section { phase, index, .. } => {
                groups.entry((phase, index)).or_default().push(directive);
            }
            FieldPath::TopLevel(_) => edits.push(directive),
        }
    }

    let mut new_activities = Vec::new();
    for ((phase, index), group) in groups {
        if creating && group_describes_activity(&group) {
            new_activities.push(DraftActivity {
                phase,
                source_index: index,
                activity: synthesize(&group),
            });
        } else {
            edits.extend(group);
        }
    }

    Partition {
        new_activities,
        edits,
    }
}

/// A group counts as a new activity only if it carries content or a
/// spatial arrangement
fn group_describes_activity(group: &[Directive]) -> bool {
    group.iter().any(|d| {
        matches!(
            d.path,
            FieldPath::Section {
                field: plancraft_document::ActivityField::Content
                    | plancraft_document::ActivityField::SpaceUsage,
                ..
            }
        )
    })
}

fn synthesize(group: &[Directive]) -> Activity {
    let mut activity = Activity::default();
    for directive in group {
        if let FieldPath::Section { field, .. } = directive.path {
            activity.set_field(field, directive.value.clone());
        }
    }
    activity
}

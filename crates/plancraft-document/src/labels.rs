//! Canonical label mapping
//!
//! Two independent fixed tables map the localized display labels used in
//! assistant traffic and on screen to the internal canonical codes stored in
//! the document. Lookup is exact-match; unmapped input passes through
//! unchanged so a failed canonicalization never blocks an otherwise-valid
//! edit.

use crate::model::Phase;
use crate::path::{ActivityField, FieldPath, TopLevelField};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Display label → canonical spatial-arrangement code
static SPACE_USAGE: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("מליאה", "whole"),
        ("עבודה בקבוצות", "groups"),
        ("עבודה אישית", "individual"),
        ("משולב", "mixed"),
    ])
});

/// Display label → canonical media-slot kind
static SCREEN_KIND: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("סרטון", "video"),
        ("תמונה", "image"),
        ("פדלט", "padlet"),
        ("אתר", "website"),
        ("ג'ניאלי", "genially"),
        ("מצגת", "presentation"),
    ])
});

static SPACE_USAGE_INVERSE: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| SPACE_USAGE.iter().map(|(k, v)| (*v, *k)).collect());

static SCREEN_KIND_INVERSE: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| SCREEN_KIND.iter().map(|(k, v)| (*v, *k)).collect());

/// Canonicalize a spatial-arrangement label; pass-through if unmapped
#[must_use]
pub fn canonical_space_usage(label: &str) -> &str {
    SPACE_USAGE.get(label).copied().unwrap_or(label)
}

/// Display label for a spatial-arrangement code; pass-through if unmapped
#[must_use]
pub fn display_space_usage(code: &str) -> &str {
    SPACE_USAGE_INVERSE.get(code).copied().unwrap_or(code)
}

/// Canonicalize a media-slot kind label; pass-through if unmapped
#[must_use]
pub fn canonical_screen_kind(label: &str) -> &str {
    SCREEN_KIND.get(label).copied().unwrap_or(label)
}

/// Display label for a media-slot kind code; pass-through if unmapped
#[must_use]
pub fn display_screen_kind(code: &str) -> &str {
    SCREEN_KIND_INVERSE.get(code).copied().unwrap_or(code)
}

/// Canonicalize a directive value for its target field
///
/// Only the enumerated fields (space usage, screen kinds) are mapped;
/// free-text fields are returned untouched.
#[must_use]
pub fn canonicalize_for(path: &FieldPath, value: &str) -> String {
    match path {
        FieldPath::Section {
            field: ActivityField::SpaceUsage,
            ..
        } => canonical_space_usage(value).to_string(),
        FieldPath::Section {
            field: ActivityField::Screen(_),
            ..
        } => canonical_screen_kind(value).to_string(),
        _ => value.to_string(),
    }
}

/// Hebrew display name of a phase
#[must_use]
pub fn phase_display_name(phase: Phase) -> &'static str {
    match phase {
        Phase::Opening => "פתיחה",
        Phase::Main => "גוף השיעור",
        Phase::Summary => "סיכום",
    }
}

/// Hebrew display label of a top-level field
#[must_use]
pub fn top_level_display_label(field: TopLevelField) -> &'static str {
    match field {
        TopLevelField::Topic => "נושא היחידה",
        TopLevelField::Duration => "זמן כולל",
        TopLevelField::GradeLevel => "שכבת גיל",
        TopLevelField::PriorKnowledge => "ידע קודם נדרש",
        TopLevelField::Position => "מיקום בתוכן",
        TopLevelField::ContentGoals => "מטרות ברמת התוכן",
        TopLevelField::SkillGoals => "מטרות ברמת המיומנויות",
    }
}

/// Hebrew display label of an activity field
#[must_use]
pub fn activity_field_display_label(field: ActivityField) -> String {
    match field {
        ActivityField::Content => "תוכן/פעילות".to_string(),
        ActivityField::SpaceUsage => "שימוש במרחב הפיזי".to_string(),
        ActivityField::Screen(slot) => format!("מסך {}", slot.number()),
        ActivityField::ScreenDescription(slot) => format!("תיאור מסך {}", slot.number()),
    }
}

/// Hebrew display label of any addressable field
///
/// Section paths render as "<phase> <position> - <field>", 1-based, the way
/// updates are echoed back to the user.
#[must_use]
pub fn field_display_label(path: &FieldPath) -> String {
    match path {
        FieldPath::TopLevel(field) => top_level_display_label(*field).to_string(),
        FieldPath::Section { phase, index, field } => format!(
            "{} {} - {}",
            phase_display_name(*phase),
            index + 1,
            activity_field_display_label(*field)
        ),
    }
}

/// Display labels for every addressable field, keyed by path string
///
/// Supplied to the assistant on every call so its directives can name fields
/// by canonical path. Covers the top-level fields and the index-0 section
/// fields of each phase.
#[must_use]
pub fn field_label_table() -> Vec<(String, String)> {
    let mut table: Vec<(String, String)> = TopLevelField::ALL
        .iter()
        .map(|f| (f.as_str().to_string(), top_level_display_label(*f).to_string()))
        .collect();

    for phase in Phase::ALL {
        for field in [ActivityField::Content, ActivityField::SpaceUsage] {
            let path = FieldPath::section(phase, 0, field);
            table.push((path.to_string(), field_display_label(&path)));
        }
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::ScreenSlot;

    #[test]
    fn space_usage_both_directions() {
        assert_eq!(canonical_space_usage("עבודה בקבוצות"), "groups");
        assert_eq!(display_space_usage("groups"), "עבודה בקבוצות");
    }

    #[test]
    fn screen_kind_both_directions() {
        assert_eq!(canonical_screen_kind("סרטון"), "video");
        assert_eq!(display_screen_kind("presentation"), "מצגת");
    }

    #[test]
    fn unmapped_labels_pass_through() {
        assert_eq!(canonical_space_usage("תחנות עבודה"), "תחנות עבודה");
        assert_eq!(canonical_screen_kind("custom"), "custom");
        assert_eq!(display_space_usage("nonsense"), "nonsense");
    }

    #[test]
    fn canonicalize_only_enumerated_fields() {
        let space: FieldPath = "main.0.spaceUsage".parse().unwrap();
        let screen: FieldPath = "main.0.screen1".parse().unwrap();
        let content: FieldPath = "main.0.content".parse().unwrap();
        let topic: FieldPath = "topic".parse().unwrap();

        assert_eq!(canonicalize_for(&space, "מליאה"), "whole");
        assert_eq!(canonicalize_for(&screen, "תמונה"), "image");
        // Free text keeps display form even when it happens to match a label
        assert_eq!(canonicalize_for(&content, "מליאה"), "מליאה");
        assert_eq!(canonicalize_for(&topic, "סרטון"), "סרטון");
    }

    #[test]
    fn section_field_label_is_one_based() {
        let path = FieldPath::section(
            Phase::Main,
            1,
            ActivityField::ScreenDescription(ScreenSlot::One),
        );
        assert_eq!(field_display_label(&path), "גוף השיעור 2 - תיאור מסך 1");
    }

    #[test]
    fn label_table_covers_top_level_and_first_activities() {
        let table = field_label_table();
        let keys: Vec<&str> = table.iter().map(|(k, _)| k.as_str()).collect();
        assert!(keys.contains(&"topic"));
        assert!(keys.contains(&"opening.0.content"));
        assert!(keys.contains(&"summary.0.spaceUsage"));
        assert_eq!(table.len(), 7 + 6);
    }
}

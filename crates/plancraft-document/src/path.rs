//! Field paths for addressing within a lesson plan
//!
//! Provides [`FieldPath`] — the closed dotted-path grammar used by direct
//! edits and assistant directives alike. A path is either a bare top-level
//! field name or `phase.index.field` into one of the three activity phases.

use crate::model::Phase;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Highest activity index a parsed path may address
///
/// Paths arrive from an untrusted producer and an in-range index drives
/// on-demand phase growth, so the addressable range must stay small.
pub const MAX_ACTIVITY_INDEX: usize = 99;

/// Top-level scalar fields of the plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TopLevelField {
    /// Unit topic
    Topic,
    /// Total duration
    Duration,
    /// Target grade level
    GradeLevel,
    /// Required prior knowledge
    PriorKnowledge,
    /// Position within the curriculum
    Position,
    /// Content-level goals
    ContentGoals,
    /// Skill-level goals
    SkillGoals,
}

impl TopLevelField {
    /// All top-level fields, in document order
    pub const ALL: [TopLevelField; 7] = [
        Self::Topic,
        Self::Duration,
        Self::GradeLevel,
        Self::PriorKnowledge,
        Self::Position,
        Self::ContentGoals,
        Self::SkillGoals,
    ];

    /// Canonical wire name
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Topic => "topic",
            Self::Duration => "duration",
            Self::GradeLevel => "gradeLevel",
            Self::PriorKnowledge => "priorKnowledge",
            Self::Position => "position",
            Self::ContentGoals => "contentGoals",
            Self::SkillGoals => "skillGoals",
        }
    }

    /// Parse from the canonical wire name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.as_str() == name)
    }
}

/// One of the three media-slot positions of an activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenSlot {
    /// First slot
    One,
    /// Second slot
    Two,
    /// Third slot
    Three,
}

impl ScreenSlot {
    /// All slots in order
    pub const ALL: [ScreenSlot; 3] = [Self::One, Self::Two, Self::Three];

    /// 1-based slot number
    #[inline]
    #[must_use]
    pub fn number(&self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
        }
    }
}

/// Addressable fields of an activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityField {
    /// Free-text activity content
    Content,
    /// Spatial-arrangement code
    SpaceUsage,
    /// Media-slot kind
    Screen(ScreenSlot),
    /// Media-slot free-text description
    ScreenDescription(ScreenSlot),
}

impl ActivityField {
    /// Canonical wire name (`content`, `spaceUsage`, `screen2`, ...)
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Content => "content",
            Self::SpaceUsage => "spaceUsage",
            Self::Screen(ScreenSlot::One) => "screen1",
            Self::Screen(ScreenSlot::Two) => "screen2",
            Self::Screen(ScreenSlot::Three) => "screen3",
            Self::ScreenDescription(ScreenSlot::One) => "screen1Description",
            Self::ScreenDescription(ScreenSlot::Two) => "screen2Description",
            Self::ScreenDescription(ScreenSlot::Three) => "screen3Description",
        }
    }

    /// Parse from a wire name
    ///
    /// Accepts the canonical flat names and the `screens.screenN` alias used
    /// by older directive producers.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.strip_prefix("screens.").unwrap_or(name);
        match name {
            "content" => Some(Self::Content),
            "spaceUsage" => Some(Self::SpaceUsage),
            "screen1" => Some(Self::Screen(ScreenSlot::One)),
            "screen2" => Some(Self::Screen(ScreenSlot::Two)),
            "screen3" => Some(Self::Screen(ScreenSlot::Three)),
            "screen1Description" => Some(Self::ScreenDescription(ScreenSlot::One)),
            "screen2Description" => Some(Self::ScreenDescription(ScreenSlot::Two)),
            "screen3Description" => Some(Self::ScreenDescription(ScreenSlot::Three)),
            _ => None,
        }
    }
}

/// Parsed field path
///
/// The grammar is closed: a path with no separator must name a top-level
/// field; a path with two or more separators must be `phase.index.field`
/// where the trailing segments are joined back into the field name. Every
/// other shape is rejected, never coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldPath {
    /// Bare top-level field
    TopLevel(TopLevelField),
    /// Field of one activity within a phase
    Section {
        /// Owning phase
        phase: Phase,
        /// Ordinal position within the phase
        index: usize,
        /// Addressed activity field
        field: ActivityField,
    },
}

impl FieldPath {
    /// Shorthand for a section path
    #[inline]
    #[must_use]
    pub fn section(phase: Phase, index: usize, field: ActivityField) -> Self {
        Self::Section { phase, index, field }
    }

    /// Phase of a section path, if nested
    #[inline]
    #[must_use]
    pub fn phase(&self) -> Option<Phase> {
        match self {
            Self::TopLevel(_) => None,
            Self::Section { phase, .. } => Some(*phase),
        }
    }
}

impl Display for FieldPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::TopLevel(field) => write!(f, "{}", field.as_str()),
            Self::Section { phase, index, field } => {
                write!(f, "{}.{}.{}", phase.as_str(), index, field.as_str())
            }
        }
    }
}

impl FromStr for FieldPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(PathError::Empty);
        }

        let mut parts = s.splitn(3, '.');
        let head = parts.next().unwrap_or_default();
        let Some(second) = parts.next() else {
            // No separator: top-level field name
            return TopLevelField::from_name(head)
                .map(FieldPath::TopLevel)
                .ok_or_else(|| PathError::UnknownTopLevelField(head.to_string()));
        };

        let Some(rest) = parts.next() else {
            // Exactly one separator has no valid reading (superseded
            // two-segment form included)
            return Err(PathError::MissingField(s.to_string()));
        };

        let phase = Phase::from_name(head)
            .ok_or_else(|| PathError::UnknownPhase(head.to_string()))?;
        let index: usize = second
            .parse()
            .ok()
            .filter(|i| *i <= MAX_ACTIVITY_INDEX)
            .ok_or_else(|| PathError::InvalidIndex(second.to_string()))?;
        let field = ActivityField::from_name(rest)
            .ok_or_else(|| PathError::UnknownActivityField(rest.to_string()))?;

        Ok(FieldPath::Section { phase, index, field })
    }
}

/// Errors related to field paths
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// Empty path string
    #[error("empty field path")]
    Empty,

    /// Bare name is not a known top-level field
    #[error("unknown top-level field: {0}")]
    UnknownTopLevelField(String),

    /// Nested path names an unknown phase
    #[error("unknown phase: {0}")]
    UnknownPhase(String),

    /// Index segment is not a non-negative integer within the addressable
    /// range
    #[error("invalid activity index: {0}")]
    InvalidIndex(String),

    /// Nested path names an unknown activity field
    #[error("unknown activity field: {0}")]
    UnknownActivityField(String),

    /// Nested path is missing its field segment
    #[error("path '{0}' is missing a field segment")]
    MissingField(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_top_level() {
        let path: FieldPath = "topic".parse().unwrap();
        assert_eq!(path, FieldPath::TopLevel(TopLevelField::Topic));
    }

    #[test]
    fn parse_section_path() {
        let path: FieldPath = "main.2.content".parse().unwrap();
        assert_eq!(
            path,
            FieldPath::Section {
                phase: Phase::Main,
                index: 2,
                field: ActivityField::Content,
            }
        );
    }

    #[test]
    fn parse_dotted_field_segments() {
        let path: FieldPath = "opening.0.screens.screen1".parse().unwrap();
        assert_eq!(
            path,
            FieldPath::section(Phase::Opening, 0, ActivityField::Screen(ScreenSlot::One))
        );
    }

    #[test]
    fn parse_screen_description() {
        let path: FieldPath = "summary.1.screen3Description".parse().unwrap();
        assert_eq!(
            path,
            FieldPath::section(
                Phase::Summary,
                1,
                ActivityField::ScreenDescription(ScreenSlot::Three)
            )
        );
    }

    #[test]
    fn unknown_top_level_rejected() {
        let result: Result<FieldPath, _> = "sideways".parse();
        assert!(matches!(result, Err(PathError::UnknownTopLevelField(_))));
    }

    #[test]
    fn unknown_phase_rejected() {
        let result: Result<FieldPath, _> = "middle.0.content".parse();
        assert!(matches!(result, Err(PathError::UnknownPhase(_))));
    }

    #[test]
    fn non_numeric_index_rejected() {
        let result: Result<FieldPath, _> = "main.two.content".parse();
        assert!(matches!(result, Err(PathError::InvalidIndex(_))));
    }

    #[test]
    fn negative_index_rejected() {
        let result: Result<FieldPath, _> = "main.-1.content".parse();
        assert!(matches!(result, Err(PathError::InvalidIndex(_))));
    }

    #[test]
    fn index_beyond_addressable_range_rejected() {
        assert!("main.99.content".parse::<FieldPath>().is_ok());

        let result: Result<FieldPath, _> = "main.100.content".parse();
        assert!(matches!(result, Err(PathError::InvalidIndex(_))));

        let result: Result<FieldPath, _> = "main.4000000000.content".parse();
        assert!(matches!(result, Err(PathError::InvalidIndex(_))));
    }

    #[test]
    fn unknown_activity_field_rejected() {
        let result: Result<FieldPath, _> = "main.0.color".parse();
        assert!(matches!(result, Err(PathError::UnknownActivityField(_))));
    }

    #[test]
    fn two_segment_form_rejected() {
        // Superseded addressing convention
        let result: Result<FieldPath, _> = "opening.content".parse();
        assert!(matches!(result, Err(PathError::MissingField(_))));
    }

    #[test]
    fn empty_path_rejected() {
        let result: Result<FieldPath, _> = "".parse();
        assert!(matches!(result, Err(PathError::Empty)));
    }

    #[test]
    fn display_round_trip() {
        for raw in ["topic", "gradeLevel", "opening.0.content", "main.3.screen2Description"] {
            let path: FieldPath = raw.parse().unwrap();
            assert_eq!(path.to_string(), raw);
        }
    }

    #[test]
    fn activity_field_names() {
        for field in [
            ActivityField::Content,
            ActivityField::SpaceUsage,
            ActivityField::Screen(ScreenSlot::Two),
            ActivityField::ScreenDescription(ScreenSlot::Three),
        ] {
            assert_eq!(ActivityField::from_name(field.as_str()), Some(field));
        }
    }
}

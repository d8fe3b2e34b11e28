//! Lesson-plan document model
//!
//! The aggregate is a set of scalar top-level fields plus three fixed phases
//! of ordered activities. Every activity is always fully shaped: all fields
//! present, possibly empty. Partial activities are never constructed, so a
//! snapshot loaded from the store or grown by the mutation engine is valid
//! by construction.

use crate::path::{ActivityField, ScreenSlot, TopLevelField};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stored-plan identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlanId(pub Uuid);

impl PlanId {
    /// Generate a fresh id
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PlanId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PlanId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One of the three fixed activity phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Lesson opening
    Opening,
    /// Lesson body
    Main,
    /// Lesson summary
    Summary,
}

impl Phase {
    /// All phases, in lesson order
    pub const ALL: [Phase; 3] = [Self::Opening, Self::Main, Self::Summary];

    /// Canonical wire name
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Opening => "opening",
            Self::Main => "main",
            Self::Summary => "summary",
        }
    }

    /// Parse from the canonical wire name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "opening" => Some(Self::Opening),
            "main" => Some(Self::Main),
            "summary" => Some(Self::Summary),
            _ => None,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One ordered activity within a phase
///
/// Fields are empty strings when unset. `spaceUsage` and the `screenN`
/// slots hold canonical codes (see [`crate::labels`]); descriptions and
/// content are free text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Activity {
    /// Free-text activity content
    pub content: String,
    /// Spatial-arrangement canonical code, empty allowed
    pub space_usage: String,
    /// Media slot 1 canonical kind
    pub screen1: String,
    /// Media slot 2 canonical kind
    pub screen2: String,
    /// Media slot 3 canonical kind
    pub screen3: String,
    /// Media slot 1 description
    pub screen1_description: String,
    /// Media slot 2 description
    pub screen2_description: String,
    /// Media slot 3 description
    pub screen3_description: String,
}

impl Activity {
    /// Read a field by address
    #[must_use]
    pub fn field(&self, field: ActivityField) -> &str {
        match field {
            ActivityField::Content => &self.content,
            ActivityField::SpaceUsage => &self.space_usage,
            ActivityField::Screen(ScreenSlot::One) => &self.screen1,
            ActivityField::Screen(ScreenSlot::Two) => &self.screen2,
            ActivityField::Screen(ScreenSlot::Three) => &self.screen3,
            ActivityField::ScreenDescription(ScreenSlot::One) => &self.screen1_description,
            ActivityField::ScreenDescription(ScreenSlot::Two) => &self.screen2_description,
            ActivityField::ScreenDescription(ScreenSlot::Three) => &self.screen3_description,
        }
    }

    /// Write a field by address
    pub fn set_field(&mut self, field: ActivityField, value: impl Into<String>) {
        let slot = match field {
            ActivityField::Content => &mut self.content,
            ActivityField::SpaceUsage => &mut self.space_usage,
            ActivityField::Screen(ScreenSlot::One) => &mut self.screen1,
            ActivityField::Screen(ScreenSlot::Two) => &mut self.screen2,
            ActivityField::Screen(ScreenSlot::Three) => &mut self.screen3,
            ActivityField::ScreenDescription(ScreenSlot::One) => &mut self.screen1_description,
            ActivityField::ScreenDescription(ScreenSlot::Two) => &mut self.screen2_description,
            ActivityField::ScreenDescription(ScreenSlot::Three) => &mut self.screen3_description,
        };
        *slot = value.into();
    }

    /// Whether every field is still empty
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self == &Activity::default()
    }
}

/// The three phase sequences
///
/// All three keys are always present; deserialization defaults a missing or
/// malformed phase to an empty sequence rather than failing the load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sections {
    /// Opening activities, in order
    pub opening: Vec<Activity>,
    /// Main-body activities, in order
    pub main: Vec<Activity>,
    /// Summary activities, in order
    pub summary: Vec<Activity>,
}

impl Sections {
    /// Activities of one phase
    #[inline]
    #[must_use]
    pub fn phase(&self, phase: Phase) -> &[Activity] {
        match phase {
            Phase::Opening => &self.opening,
            Phase::Main => &self.main,
            Phase::Summary => &self.summary,
        }
    }

    /// Mutable activities of one phase
    #[inline]
    pub fn phase_mut(&mut self, phase: Phase) -> &mut Vec<Activity> {
        match phase {
            Phase::Opening => &mut self.opening,
            Phase::Main => &mut self.main,
            Phase::Summary => &mut self.summary,
        }
    }

    /// Total activity count across phases
    #[must_use]
    pub fn len(&self) -> usize {
        self.opening.len() + self.main.len() + self.summary.len()
    }

    /// Whether all phases are empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The complete lesson-plan aggregate
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LessonPlan {
    /// Owning user
    pub user_id: String,
    /// Unit topic
    pub topic: String,
    /// Total duration
    pub duration: String,
    /// Target grade level
    pub grade_level: String,
    /// Required prior knowledge
    pub prior_knowledge: String,
    /// Position within the curriculum
    pub position: String,
    /// Content-level goals
    pub content_goals: String,
    /// Skill-level goals
    pub skill_goals: String,
    /// The three activity phases
    pub sections: Sections,
}

impl LessonPlan {
    /// Create an empty plan for a user: scalar fields empty, all three
    /// phases present and empty
    #[must_use]
    pub fn empty(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            ..Self::default()
        }
    }

    /// Read a top-level field
    #[must_use]
    pub fn top_level(&self, field: TopLevelField) -> &str {
        match field {
            TopLevelField::Topic => &self.topic,
            TopLevelField::Duration => &self.duration,
            TopLevelField::GradeLevel => &self.grade_level,
            TopLevelField::PriorKnowledge => &self.prior_knowledge,
            TopLevelField::Position => &self.position,
            TopLevelField::ContentGoals => &self.content_goals,
            TopLevelField::SkillGoals => &self.skill_goals,
        }
    }

    /// Write a top-level field
    pub fn set_top_level(&mut self, field: TopLevelField, value: impl Into<String>) {
        let slot = match field {
            TopLevelField::Topic => &mut self.topic,
            TopLevelField::Duration => &mut self.duration,
            TopLevelField::GradeLevel => &mut self.grade_level,
            TopLevelField::PriorKnowledge => &mut self.prior_knowledge,
            TopLevelField::Position => &mut self.position,
            TopLevelField::ContentGoals => &mut self.content_goals,
            TopLevelField::SkillGoals => &mut self.skill_goals,
        };
        *slot = value.into();
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a free-text value does not name a known enumeration member
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} `{value}`, expected one of: {expected}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}

/// Proficiency tier shared by students (current level) and mentors (experience level)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    /// Ordinal used for level distance: beginner=1, intermediate=2, advanced=3
    #[inline]
    pub fn rank(self) -> u8 {
        match self {
            Level::Beginner => 1,
            Level::Intermediate => 2,
            Level::Advanced => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Level::Beginner => "beginner",
            Level::Intermediate => "intermediate",
            Level::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Level::Beginner),
            "intermediate" => Ok(Level::Intermediate),
            "advanced" => Ok(Level::Advanced),
            _ => Err(ParseEnumError {
                kind: "level",
                value: s.to_string(),
                expected: "beginner, intermediate, advanced",
            }),
        }
    }
}

impl TryFrom<String> for Level {
    type Error = ParseEnumError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Pedagogical preference tag. `Mixed` on the mentor side matches any student style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum LearningStyle {
    Visual,
    Auditory,
    Reading,
    Kinesthetic,
    Mixed,
}

impl LearningStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            LearningStyle::Visual => "visual",
            LearningStyle::Auditory => "auditory",
            LearningStyle::Reading => "reading",
            LearningStyle::Kinesthetic => "kinesthetic",
            LearningStyle::Mixed => "mixed",
        }
    }
}

impl fmt::Display for LearningStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LearningStyle {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "visual" => Ok(LearningStyle::Visual),
            "auditory" => Ok(LearningStyle::Auditory),
            "reading" => Ok(LearningStyle::Reading),
            "kinesthetic" => Ok(LearningStyle::Kinesthetic),
            "mixed" => Ok(LearningStyle::Mixed),
            _ => Err(ParseEnumError {
                kind: "learning style",
                value: s.to_string(),
                expected: "visual, auditory, reading, kinesthetic, mixed",
            }),
        }
    }
}

impl TryFrom<String> for LearningStyle {
    type Error = ParseEnumError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A mentor's teaching style, accepted either as one style or as a list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TeachingStyle {
    Single(LearningStyle),
    Multiple(Vec<LearningStyle>),
}

impl TeachingStyle {
    /// View the style(s) as a slice so scoring never branches on the shape
    pub fn styles(&self) -> &[LearningStyle] {
        match self {
            TeachingStyle::Single(style) => std::slice::from_ref(style),
            TeachingStyle::Multiple(styles) => styles,
        }
    }
}

impl From<LearningStyle> for TeachingStyle {
    fn from(style: LearningStyle) -> Self {
        TeachingStyle::Single(style)
    }
}

impl From<Vec<LearningStyle>> for TeachingStyle {
    fn from(styles: Vec<LearningStyle>) -> Self {
        TeachingStyle::Multiple(styles)
    }
}

/// What a student wants to learn and how
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub goals: Vec<String>,
    pub level: Level,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(rename = "learningStyle", default, skip_serializing_if = "Option::is_none")]
    pub learning_style: Option<LearningStyle>,
}

/// A candidate mentor as seen by the recommender
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MentorProfile {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub expertise: Vec<String>,
    #[serde(rename = "experienceLevel")]
    pub experience_level: Level,
    #[serde(rename = "teachingStyle", default, skip_serializing_if = "Option::is_none")]
    pub teaching_style: Option<TeachingStyle>,
    pub rating: f64,
}

impl MentorProfile {
    /// Teaching styles as a slice, empty when the mentor declared none
    pub fn teaching_styles(&self) -> &[LearningStyle] {
        self.teaching_style
            .as_ref()
            .map(TeachingStyle::styles)
            .unwrap_or(&[])
    }
}

/// Per-criterion percentages, each rounded independently
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakdown {
    #[serde(rename = "goalMatch")]
    pub goal_match: u8,
    #[serde(rename = "skillOverlap")]
    pub skill_overlap: u8,
    #[serde(rename = "levelCompatibility")]
    pub level_compatibility: u8,
    #[serde(rename = "ratingScore")]
    pub rating_score: u8,
    #[serde(rename = "learningStyleMatch")]
    pub learning_style_match: u8,
}

/// Ranked recommendation. Borrows the mentor from the caller's collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult<'a> {
    pub mentor: &'a MentorProfile,
    #[serde(rename = "matchPercentage")]
    pub match_percentage: u8,
    pub breakdown: Breakdown,
    pub explanation: String,
}

/// Raw mentor record as exported by the mentor directory (`GET /mentor/all`)
///
/// Only `fieldOfExpertise` is guaranteed by the directory. The recommender
/// fields (`tags`, `experienceLevel`, `teachingStyle`, `rating`) are optional
/// and filled from directory defaults when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MentorRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(rename = "fieldOfExpertise")]
    pub field_of_expertise: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub about: Option<String>,
    #[serde(rename = "materialLinks", default)]
    pub material_links: Vec<String>,
    #[serde(rename = "linkedIn", default)]
    pub linked_in: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(rename = "experienceLevel", default)]
    pub experience_level: Option<Level>,
    #[serde(rename = "teachingStyle", default)]
    pub teaching_style: Option<TeachingStyle>,
    #[serde(default)]
    pub rating: Option<f64>,
}

/// Scoring weights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub goal_match: f64,
    pub skill_overlap: f64,
    pub level_compatibility: f64,
    pub rating: f64,
    pub learning_style: f64,
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.goal_match
            + self.skill_overlap
            + self.level_compatibility
            + self.rating
            + self.learning_style
    }

    /// True when every weight is non-negative and they add up to 1.0
    pub fn is_normalized(&self) -> bool {
        let non_negative = [
            self.goal_match,
            self.skill_overlap,
            self.level_compatibility,
            self.rating,
            self.learning_style,
        ]
        .iter()
        .all(|w| *w >= 0.0);

        non_negative && (self.sum() - 1.0).abs() < 1e-6
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            goal_match: 0.40,
            skill_overlap: 0.30,
            level_compatibility: 0.15,
            rating: 0.10,
            learning_style: 0.05,
        }
    }
}

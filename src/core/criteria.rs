use std::collections::HashSet;
use crate::models::{Level, LearningStyle};

/// Highest rating a mentor can hold
pub const MAX_RATING: f64 = 5.0;

/// Fraction of the wanted terms the mentor offers (0.0 to 1.0)
///
/// Counts every entry of `wanted`, duplicates included, so the ratio is
/// matched entries over all entries. An empty `wanted` list scores 0.
#[inline]
pub fn coverage_ratio(wanted: &[String], offered: &HashSet<String>) -> f64 {
    if wanted.is_empty() {
        return 0.0;
    }

    let matched = wanted
        .iter()
        .filter(|term| offered.contains(term.as_str()))
        .count();

    matched as f64 / wanted.len() as f64
}

/// Level compatibility (0.0 to 1.0)
/// Same level = 1.0, one tier apart = 0.5, beginner vs advanced = 0.0
#[inline]
pub fn level_compatibility(student: Level, mentor: Level) -> f64 {
    let diff = (mentor.rank() as f64 - student.rank() as f64).abs();
    (1.0 - diff / 2.0).max(0.0)
}

/// Rating score (0.0 to 1.0), clamping the rating to [0, 5] first
#[inline]
pub fn rating_score(rating: f64) -> f64 {
    if rating.is_nan() {
        return 0.0;
    }
    rating.clamp(0.0, MAX_RATING) / MAX_RATING
}

/// Learning style match (0.0 or 1.0)
///
/// A student without a preference scores 0 here. Otherwise the mentor matches
/// when teaching `Mixed` or exactly the student's style.
#[inline]
pub fn learning_style_match(student: Option<LearningStyle>, mentor: &[LearningStyle]) -> f64 {
    let Some(wanted) = student else {
        return 0.0;
    };

    let matched = mentor
        .iter()
        .any(|style| *style == LearningStyle::Mixed || *style == wanted);

    if matched { 1.0 } else { 0.0 }
}

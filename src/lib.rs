//! Mentor Match - content-based mentor recommendation
//!
//! This library ranks mentors for a student with a fixed-weight, multi-criteria
//! scoring function (goals, interests, level, rating, learning style) and
//! serves the ranking over a small HTTP API.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{recommend_mentors, Recommender, DEFAULT_TOP_N};
pub use crate::models::{
    Breakdown, Level, LearningStyle, MatchResult, MentorProfile, ScoringWeights, StudentProfile,
    TeachingStyle,
};
pub use crate::services::MentorDirectory;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let student = StudentProfile {
            id: None,
            goals: vec![],
            level: Level::Beginner,
            interests: vec![],
            learning_style: None,
        };
        assert!(recommend_mentors(&student, &[], DEFAULT_TOP_N).is_empty());
    }
}

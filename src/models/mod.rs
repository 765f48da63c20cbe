// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Breakdown, Level, LearningStyle, MatchResult, MentorProfile, MentorRecord, ParseEnumError,
    ScoringWeights, StudentProfile, TeachingStyle,
};
pub use requests::{RecommendRequest, MAX_STUDENT_TERMS};
pub use responses::{ErrorResponse, HealthResponse, MentorsResponse, RecommendResponse};

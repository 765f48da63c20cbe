use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use crate::models::domain::{MentorProfile, StudentProfile};

/// Upper bound on goals or interests a single student may submit
pub const MAX_STUDENT_TERMS: usize = 64;

/// Request to rank mentors for a student
///
/// When `mentors` is omitted the service ranks its own mentor directory.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendRequest {
    #[validate(custom(function = "validate_student"))]
    pub student: StudentProfile,
    #[serde(default)]
    #[validate(length(max = 1000))]
    pub mentors: Option<Vec<MentorProfile>>,
    #[serde(default)]
    #[serde(alias = "top_n", rename = "topN")]
    pub top_n: Option<usize>,
}

fn validate_student(student: &StudentProfile) -> Result<(), ValidationError> {
    if student.goals.len() > MAX_STUDENT_TERMS || student.interests.len() > MAX_STUDENT_TERMS {
        return Err(ValidationError::new("too_many_terms"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::Level;

    fn student(goal_count: usize) -> StudentProfile {
        StudentProfile {
            id: None,
            goals: (0..goal_count).map(|i| format!("goal {}", i)).collect(),
            level: Level::Beginner,
            interests: vec![],
            learning_style: None,
        }
    }

    #[test]
    fn test_top_n_accepts_both_spellings() {
        let camel: RecommendRequest =
            serde_json::from_str(r#"{"student": {"level": "beginner"}, "topN": 5}"#).unwrap();
        let snake: RecommendRequest =
            serde_json::from_str(r#"{"student": {"level": "beginner"}, "top_n": 5}"#).unwrap();

        assert_eq!(camel.top_n, Some(5));
        assert_eq!(snake.top_n, Some(5));
        assert!(camel.mentors.is_none());
    }

    #[test]
    fn test_validation_rejects_oversized_student() {
        let ok = RecommendRequest { student: student(3), mentors: None, top_n: None };
        assert!(ok.validate().is_ok());

        let too_many = RecommendRequest {
            student: student(MAX_STUDENT_TERMS + 1),
            mentors: None,
            top_n: None,
        };
        assert!(too_many.validate().is_err());
    }
}

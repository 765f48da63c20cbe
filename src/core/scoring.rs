use crate::models::{Breakdown, MentorProfile, ScoringWeights};
use crate::core::{
    criteria::{coverage_ratio, learning_style_match, level_compatibility, rating_score},
    normalize::{normalize_term_set, NormalizedStudent},
};

/// Separator between explanation segments
pub const EXPLANATION_SEPARATOR: &str = " · ";

/// Fractional per-criterion scores for one mentor, each in 0.0..=1.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubScores {
    pub goal_match: f64,
    pub skill_overlap: f64,
    pub level_compatibility: f64,
    pub rating: f64,
    pub learning_style: f64,
}

impl SubScores {
    /// Weighted combination of the fractional scores (0.0 to 1.0 for normalized weights)
    pub fn weighted(&self, weights: &ScoringWeights) -> f64 {
        self.goal_match * weights.goal_match
            + self.skill_overlap * weights.skill_overlap
            + self.level_compatibility * weights.level_compatibility
            + self.rating * weights.rating
            + self.learning_style * weights.learning_style
    }

    /// Round every criterion independently to a percentage
    pub fn breakdown(&self) -> Breakdown {
        Breakdown {
            goal_match: to_percentage(self.goal_match),
            skill_overlap: to_percentage(self.skill_overlap),
            level_compatibility: to_percentage(self.level_compatibility),
            rating_score: to_percentage(self.rating),
            learning_style_match: to_percentage(self.learning_style),
        }
    }
}

/// Compute the five criterion scores of a mentor for a student
///
/// criteria:
///     goal_match            # student goals covered by mentor expertise
///     skill_overlap         # student interests covered by mentor expertise
///     level_compatibility   # closer tiers score higher
///     rating                # clamp(rating, 0, 5) / 5
///     learning_style        # mixed or exact style, only if the student has one
pub fn calculate_sub_scores(student: &NormalizedStudent, mentor: &MentorProfile) -> SubScores {
    let expertise = normalize_term_set(&mentor.expertise);

    SubScores {
        goal_match: coverage_ratio(&student.goals, &expertise),
        skill_overlap: coverage_ratio(&student.interests, &expertise),
        level_compatibility: level_compatibility(student.level, mentor.experience_level),
        rating: rating_score(mentor.rating),
        learning_style: learning_style_match(student.learning_style, mentor.teaching_styles()),
    }
}

/// Calculate a match percentage (0-100) for a mentor along with its sub-scores
///
/// The percentage is rounded once from the unrounded weighted sum, so it can
/// differ from a weighted sum of the rounded breakdown values.
pub fn calculate_match_score(
    student: &NormalizedStudent,
    mentor: &MentorProfile,
    weights: &ScoringWeights,
) -> (u8, SubScores) {
    let sub_scores = calculate_sub_scores(student, mentor);
    let match_percentage = to_percentage(sub_scores.weighted(weights));

    (match_percentage, sub_scores)
}

/// Convert a 0-1 fraction to a rounded 0-100 percentage
#[inline]
pub fn to_percentage(fraction: f64) -> u8 {
    if fraction.is_nan() {
        return 0;
    }
    (fraction * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Human readable summary: goals, skills, level, rating and, when the student
/// asked for one, learning style
pub fn build_explanation(breakdown: &Breakdown, include_learning_style: bool) -> String {
    let mut parts = vec![
        format!("Goals: {}%", breakdown.goal_match),
        format!("Skills: {}%", breakdown.skill_overlap),
        format!("Level: {}%", breakdown.level_compatibility),
        format!("Rating: {}%", breakdown.rating_score),
    ];

    if include_learning_style {
        parts.push(format!("Learning style: {}%", breakdown.learning_style_match));
    }

    parts.join(EXPLANATION_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Level, LearningStyle, StudentProfile, TeachingStyle};

    fn create_student(style: Option<LearningStyle>) -> NormalizedStudent {
        NormalizedStudent::from_profile(&StudentProfile {
            id: None,
            goals: vec!["react".to_string()],
            level: Level::Beginner,
            interests: vec!["javascript".to_string()],
            learning_style: style,
        })
    }

    fn create_mentor(expertise: &[&str], level: Level, rating: f64) -> MentorProfile {
        MentorProfile {
            id: "m".to_string(),
            name: None,
            expertise: expertise.iter().map(|s| s.to_string()).collect(),
            experience_level: level,
            teaching_style: Some(TeachingStyle::Single(LearningStyle::Mixed)),
            rating,
        }
    }

    #[test]
    fn test_perfect_match() {
        let student = create_student(Some(LearningStyle::Mixed));
        let mentor = create_mentor(&["React", "JavaScript"], Level::Beginner, 5.0);

        let (score, sub_scores) =
            calculate_match_score(&student, &mentor, &ScoringWeights::default());

        assert_eq!(score, 100);
        assert_eq!(
            sub_scores.breakdown(),
            Breakdown {
                goal_match: 100,
                skill_overlap: 100,
                level_compatibility: 100,
                rating_score: 100,
                learning_style_match: 100,
            }
        );
    }

    #[test]
    fn test_total_rounded_from_fractions() {
        // goal 1/3, level 1.0, rating 0.9: 0.4/3 + 0.15 + 0.09 = 0.3733..
        let student = NormalizedStudent::from_profile(&StudentProfile {
            id: None,
            goals: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            level: Level::Advanced,
            interests: vec![],
            learning_style: None,
        });
        let mentor = create_mentor(&["A"], Level::Advanced, 4.5);

        let (score, sub_scores) =
            calculate_match_score(&student, &mentor, &ScoringWeights::default());
        let breakdown = sub_scores.breakdown();

        assert_eq!(score, 37);
        assert_eq!(breakdown.goal_match, 33);
        assert_eq!(breakdown.skill_overlap, 0);
        assert_eq!(breakdown.level_compatibility, 100);
        assert_eq!(breakdown.rating_score, 90);
        assert_eq!(breakdown.learning_style_match, 0);
    }

    #[test]
    fn test_custom_weights() {
        let student = create_student(None);
        let mentor = create_mentor(&["react"], Level::Advanced, 0.0);
        let goals_only = ScoringWeights {
            goal_match: 1.0,
            skill_overlap: 0.0,
            level_compatibility: 0.0,
            rating: 0.0,
            learning_style: 0.0,
        };

        let (score, _) = calculate_match_score(&student, &mentor, &goals_only);
        assert_eq!(score, 100);
    }

    #[test]
    fn test_to_percentage() {
        assert_eq!(to_percentage(0.0), 0);
        assert_eq!(to_percentage(0.005), 1);
        assert_eq!(to_percentage(1.0 / 3.0), 33);
        assert_eq!(to_percentage(2.0 / 3.0), 67);
        assert_eq!(to_percentage(1.2), 100);
        assert_eq!(to_percentage(f64::NAN), 0);
    }

    #[test]
    fn test_explanation_with_and_without_style() {
        let breakdown = Breakdown {
            goal_match: 50,
            skill_overlap: 0,
            level_compatibility: 100,
            rating_score: 90,
            learning_style_match: 100,
        };

        assert_eq!(
            build_explanation(&breakdown, true),
            "Goals: 50% · Skills: 0% · Level: 100% · Rating: 90% · Learning style: 100%"
        );
        assert_eq!(
            build_explanation(&breakdown, false),
            "Goals: 50% · Skills: 0% · Level: 100% · Rating: 90%"
        );
    }
}

use crate::models::{MatchResult, MentorProfile, ScoringWeights, StudentProfile};
use crate::core::{
    normalize::NormalizedStudent,
    scoring::{build_explanation, calculate_match_score},
};

/// Number of recommendations returned when the caller does not ask for a count
pub const DEFAULT_TOP_N: usize = 3;

/// Upper bound on recommendations a single request may ask for
pub const DEFAULT_MAX_TOP_N: usize = 50;

/// Content-based mentor recommender
///
/// # Pipeline
/// 1. Normalize the student's goals and interests once
/// 2. Score every mentor on the five weighted criteria
/// 3. Rank by match percentage (stable, ties keep input order)
/// 4. Keep the top N
///
/// The recommender holds only its weights; every call is a pure function of
/// its arguments and never mutates them.
#[derive(Debug, Clone)]
pub struct Recommender {
    weights: ScoringWeights,
}

impl Recommender {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score a single mentor against an already normalized student
    pub fn score<'a>(
        &self,
        student: &NormalizedStudent,
        mentor: &'a MentorProfile,
    ) -> MatchResult<'a> {
        let (match_percentage, sub_scores) = calculate_match_score(student, mentor, &self.weights);
        let breakdown = sub_scores.breakdown();
        let explanation = build_explanation(&breakdown, student.has_learning_style());

        tracing::trace!(
            mentor_id = %mentor.id,
            match_percentage,
            "scored mentor"
        );

        MatchResult {
            mentor,
            match_percentage,
            breakdown,
            explanation,
        }
    }

    /// Rank mentors for a student and return at most `top_n` results
    ///
    /// # Arguments
    /// * `student` - The student's profile
    /// * `mentors` - Candidate mentors, borrowed for the lifetime of the results
    /// * `top_n` - Maximum number of results
    ///
    /// # Returns
    /// `min(top_n, mentors.len())` results, highest match percentage first
    pub fn recommend<'a>(
        &self,
        student: &StudentProfile,
        mentors: &'a [MentorProfile],
        top_n: usize,
    ) -> Vec<MatchResult<'a>> {
        let normalized = NormalizedStudent::from_profile(student);

        let mut results: Vec<MatchResult<'a>> = mentors
            .iter()
            .map(|mentor| self.score(&normalized, mentor))
            .collect();

        // sort_by is stable, so equal percentages keep the caller's order
        results.sort_by(|a, b| b.match_percentage.cmp(&a.match_percentage));
        results.truncate(top_n);

        tracing::debug!(
            "Ranked {} mentors, returning {}",
            mentors.len(),
            results.len()
        );

        results
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

/// Rank mentors with the default weights
pub fn recommend_mentors<'a>(
    student: &StudentProfile,
    mentors: &'a [MentorProfile],
    top_n: usize,
) -> Vec<MatchResult<'a>> {
    Recommender::with_default_weights().recommend(student, mentors, top_n)
}

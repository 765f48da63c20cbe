use std::collections::HashSet;
use crate::models::{Level, LearningStyle, StudentProfile};

/// Normalize a single free-text term: trim and lowercase, `None` if blank
#[inline]
pub fn normalize_term(term: &str) -> Option<String> {
    let trimmed = term.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Normalize a list of terms, dropping blanks and keeping order and duplicates
pub fn normalize_terms<S: AsRef<str>>(terms: &[S]) -> Vec<String> {
    terms
        .iter()
        .filter_map(|term| normalize_term(term.as_ref()))
        .collect()
}

/// Normalize a list of terms into a lookup set
pub fn normalize_term_set<S: AsRef<str>>(terms: &[S]) -> HashSet<String> {
    terms
        .iter()
        .filter_map(|term| normalize_term(term.as_ref()))
        .collect()
}

/// Student profile with its free-text lists normalized once per call
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedStudent {
    pub goals: Vec<String>,
    pub interests: Vec<String>,
    pub level: Level,
    pub learning_style: Option<LearningStyle>,
}

impl NormalizedStudent {
    pub fn from_profile(profile: &StudentProfile) -> Self {
        Self {
            goals: normalize_terms(&profile.goals),
            interests: normalize_terms(&profile.interests),
            level: profile.level,
            learning_style: profile.learning_style,
        }
    }

    pub fn has_learning_style(&self) -> bool {
        self.learning_style.is_some()
    }
}

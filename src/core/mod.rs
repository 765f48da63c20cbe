// Core algorithm exports
pub mod criteria;
pub mod normalize;
pub mod recommender;
pub mod scoring;

pub use criteria::{coverage_ratio, learning_style_match, level_compatibility, rating_score};
pub use normalize::{normalize_term, normalize_terms, NormalizedStudent};
pub use recommender::{recommend_mentors, Recommender, DEFAULT_MAX_TOP_N, DEFAULT_TOP_N};
pub use scoring::{build_explanation, calculate_match_score, SubScores, EXPLANATION_SEPARATOR};

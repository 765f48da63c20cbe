use serde::{Deserialize, Serialize};
use crate::models::domain::{MatchResult, MentorProfile};

/// Response for the recommendations endpoint
#[derive(Debug, Clone, Serialize)]
pub struct RecommendResponse<'a> {
    #[serde(rename = "requestId")]
    pub request_id: String,
    pub recommendations: Vec<MatchResult<'a>>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Response listing the mentor directory
#[derive(Debug, Clone, Serialize)]
pub struct MentorsResponse<'a> {
    pub mentors: &'a [MentorProfile],
    pub count: usize,
    #[serde(rename = "loadedAt")]
    pub loaded_at: chrono::DateTime<chrono::Utc>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub mentors: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

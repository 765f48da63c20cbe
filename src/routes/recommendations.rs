use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{
    ErrorResponse, HealthResponse, MentorProfile, MentorsResponse, RecommendRequest,
    RecommendResponse,
};
use crate::services::MentorDirectory;
use crate::core::{Recommender, DEFAULT_MAX_TOP_N, DEFAULT_TOP_N};
use std::sync::Arc;

/// Bounds applied to the requested number of recommendations
#[derive(Debug, Clone, Copy)]
pub struct RecommendLimits {
    pub default_top_n: usize,
    pub max_top_n: usize,
}

impl RecommendLimits {
    /// Requested count, or the default, capped at the maximum
    pub fn resolve(&self, requested: Option<usize>) -> usize {
        requested.unwrap_or(self.default_top_n).min(self.max_top_n)
    }
}

impl Default for RecommendLimits {
    fn default() -> Self {
        Self {
            default_top_n: DEFAULT_TOP_N,
            max_top_n: DEFAULT_MAX_TOP_N,
        }
    }
}

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<MentorDirectory>,
    pub recommender: Recommender,
    pub limits: RecommendLimits,
}

/// Configure all recommendation-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/mentors", web::get().to(list_mentors))
        .route("/recommendations", web::post().to(recommend));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = if state.directory.is_empty() { "degraded" } else { "healthy" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        mentors: state.directory.len(),
    })
}

/// List the mentor directory
///
/// GET /api/v1/mentors
async fn list_mentors(state: web::Data<AppState>) -> impl Responder {
    let mentors = state.directory.profiles();

    HttpResponse::Ok().json(MentorsResponse {
        mentors,
        count: mentors.len(),
        loaded_at: state.directory.loaded_at(),
    })
}

/// Recommend mentors endpoint
///
/// POST /api/v1/recommendations
///
/// Request body:
/// ```json
/// {
///   "student": {
///     "goals": ["react"],
///     "interests": ["javascript"],
///     "level": "beginner",
///     "learningStyle": "visual"
///   },
///   "mentors": [ ... ],
///   "topN": 3
/// }
/// ```
///
/// `mentors` is optional; the mentor directory is ranked when it is missing.
async fn recommend(
    state: web::Data<AppState>,
    req: web::Json<RecommendRequest>,
) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for recommend request: field_errors={:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let request_id = uuid::Uuid::new_v4().to_string();
    let top_n = state.limits.resolve(req.top_n);

    let (mentors, source): (&[MentorProfile], &str) = match &req.mentors {
        Some(mentors) => (mentors.as_slice(), "request"),
        None => (state.directory.profiles(), "directory"),
    };

    tracing::info!(
        request_id = %request_id,
        "Recommending up to {} of {} mentors from {}",
        top_n,
        mentors.len(),
        source
    );

    let recommendations = state.recommender.recommend(&req.student, mentors, top_n);

    if let Some(best) = recommendations.first() {
        tracing::debug!(
            request_id = %request_id,
            "Best match {} at {}%",
            best.mentor.id,
            best.match_percentage
        );
    }

    HttpResponse::Ok().json(RecommendResponse {
        request_id,
        recommendations,
        total_candidates: mentors.len(),
    })
}

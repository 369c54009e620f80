use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::Ranker;
use crate::models::{ErrorResponse, HealthResponse, RankSuggestionsRequest, RankSuggestionsResponse, Therapist};
use crate::services::{RosterCache, RosterClient};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub roster: Arc<RosterClient>,
    pub cache: Arc<RosterCache>,
    pub ranker: Ranker,
}

/// Configure all suggestion-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/suggestions/rank", web::post().to(rank_suggestions));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Rank therapist suggestions endpoint
///
/// POST /api/v1/suggestions/rank
///
/// Request body:
/// ```json
/// {
///   "answers": {
///     "genderPreference": "Female",
///     "issues": ["Anxiety"],
///     "language": "English",
///     "budget": "40k-50k",
///     "availability": "Anytime"
///   },
///   "limit": 20
/// }
/// ```
///
/// `answers` may be null for the default ranking by rating. A roster
/// fetch failure degrades to an empty suggestion list rather than an
/// error: the client renders "no suggestions" and retries.
async fn rank_suggestions(
    state: web::Data<AppState>,
    req: web::Json<RankSuggestionsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for rank_suggestions request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    // Cap limit at 100 to keep response payloads bounded
    let limit = req.limit.min(100) as usize;

    tracing::info!(
        "Ranking suggestions (answers: {}, limit: {})",
        if req.answers.is_some() { "quiz" } else { "default" },
        limit
    );

    let roster = load_roster(&state).await;
    let total_candidates = roster.len();

    let mut suggestions = state.ranker.rank(req.answers.as_ref(), roster);
    suggestions.truncate(limit);

    tracing::info!(
        "Returning {} suggestions (from {} candidates)",
        suggestions.len(),
        total_candidates
    );

    HttpResponse::Ok().json(RankSuggestionsResponse {
        suggestions,
        total_candidates,
    })
}

/// Load the roster from cache, falling back to the directory API.
///
/// A failed fetch yields an empty roster: ranking an empty roster is an
/// empty suggestion list, never a crash.
async fn load_roster(state: &AppState) -> Vec<Therapist> {
    if let Some(cached) = state.cache.get().await {
        return (*cached).clone();
    }

    match state.roster.fetch_roster().await {
        Ok(roster) => {
            let shared = state.cache.set(roster).await;
            (*shared).clone()
        }
        Err(e) => {
            tracing::warn!("Roster fetch failed, returning no suggestions: {}", e);
            vec![]
        }
    }
}

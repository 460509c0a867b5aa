pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::applications::handlers as applications;
use crate::candidates::handlers as candidates;
use crate::jobs::handlers as jobs;
use crate::matching::handlers as matching;
use crate::scheduling::handlers as scheduling;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Candidate API
        .route(
            "/api/v1/candidates",
            post(candidates::handle_create_candidate).get(candidates::handle_list_candidates),
        )
        .route(
            "/api/v1/candidates/:id",
            get(candidates::handle_get_candidate).delete(candidates::handle_delete_candidate),
        )
        .route(
            "/api/v1/candidates/:id/matches",
            get(matching::handle_candidate_matches),
        )
        // Job API
        .route(
            "/api/v1/jobs",
            post(jobs::handle_create_job).get(jobs::handle_list_jobs),
        )
        .route("/api/v1/jobs/:id", get(jobs::handle_get_job))
        // Match API
        .route("/api/v1/match/score", post(matching::handle_score))
        // Application API
        .route(
            "/api/v1/applications",
            post(applications::handle_create_application)
                .get(applications::handle_list_applications),
        )
        // Interview API
        .route(
            "/api/v1/interviews",
            post(scheduling::handle_offer_slot).get(scheduling::handle_list_slots),
        )
        .route(
            "/api/v1/interviews/:id/confirm",
            post(scheduling::handle_confirm_slot),
        )
        .route(
            "/api/v1/interviews/:id/decline",
            post(scheduling::handle_decline_slot),
        )
        .route(
            "/api/v1/interviews/:id/feedback",
            post(scheduling::handle_create_feedback).get(scheduling::handle_list_feedback),
        )
        .with_state(state)
}

pub mod handlers;
pub mod health;

use axum::{routing::get, Router};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/internships/recommendations",
            get(handlers::handle_recommendations),
        )
        .route(
            "/api/v1/candidates/ranking",
            get(handlers::handle_candidate_ranking),
        )
        .with_state(state)
}

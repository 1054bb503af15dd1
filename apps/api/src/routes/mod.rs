pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis;
use crate::state::AppState;
use crate::stems;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/facets", get(stems::handlers::handle_list_facets))
        .route(
            "/generate-sample",
            post(stems::handlers::handle_generate_sample),
        )
        .route("/generate", post(stems::handlers::handle_generate))
        .route("/analyze", post(analysis::handlers::handle_analyze))
        .with_state(state)
}

pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::enhancement::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/enhance", post(handlers::handle_enhance))
        .route("/api/v1/segment", post(handlers::handle_segment))
        .route("/api/v1/jd-match", post(handlers::handle_jd_match))
        .route("/api/v1/export", post(handlers::handle_export))
        .with_state(state)
}

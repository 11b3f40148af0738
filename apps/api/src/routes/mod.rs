pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::kpi::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // KPI analysis (model path)
        .route("/api/v1/kpi/analyze/:role", post(handlers::handle_analyze))
        // Survey fallback (deterministic path)
        .route("/api/v1/kpi/fallback/:role", post(handlers::handle_fallback))
        .with_state(state)
}

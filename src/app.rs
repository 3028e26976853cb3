use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/mood", post(handlers::log_mood))
        .route("/api/mood/today", get(handlers::get_today))
        .route("/api/mood/history", get(handlers::get_history))
        .route("/api/mood/stats", get(handlers::get_stats))
        .with_state(state)
}

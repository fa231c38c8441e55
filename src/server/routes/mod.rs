pub mod charts;
pub mod sessions;
pub mod system;

use crate::server::state::AppState;
use axum::Router;

pub fn system_routes() -> Router<AppState> {
    Router::new()
        .route("/", axum::routing::get(system::index))
        .route("/health", axum::routing::get(system::health))
}

pub fn chart_routes() -> Router<AppState> {
    Router::new()
        .route("/api/layout", axum::routing::get(charts::layout))
        .route("/api/charts/proportion", axum::routing::get(charts::proportion))
        .route("/api/charts/correlation", axum::routing::get(charts::correlation))
}

pub fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/api/sessions", axum::routing::post(sessions::open))
        .route(
            "/api/sessions/{session_id}",
            axum::routing::get(sessions::state).delete(sessions::close),
        )
        .route(
            "/api/sessions/{session_id}/events",
            axum::routing::post(sessions::dispatch),
        )
}

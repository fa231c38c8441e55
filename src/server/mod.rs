//! HTTP session host: serves the dashboard page and the JSON endpoints it
//! drives. One `Session` per browser tab, one shared `Dataset`.

pub mod error;
pub mod page;
pub mod routes;
pub mod state;

pub use self::state::AppState;

use axum::Router;
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

pub fn router(state: AppState) -> Router {
    routes::system_routes()
        .merge(routes::chart_routes())
        .merge(routes::session_routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds `addr` and serves until the process is stopped.
pub async fn serve(state: AppState, addr: SocketAddr) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("🚀 Dashboard listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router(state)).await
}

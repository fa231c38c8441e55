use crate::server::page::INDEX_HTML;
use crate::server::state::AppState;
use axum::{extract::State, response::Html, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: String,
    pub version: String,
    pub records: usize,
    pub sites: usize,
    pub sessions: usize,
}

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn health(State(state): State<AppState>) -> Json<StatusResponse> {
    let dataset = state.dataset();
    Json(StatusResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        records: dataset.len(),
        sites: dataset.distinct_sites().len(),
        sessions: state.sessions.len(),
    })
}

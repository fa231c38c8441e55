use crate::binding::{ChartFrame, Event};
use crate::filter::{FilterState, PayloadRange, SiteSelection};
use crate::render::{correlation_figure, proportion_figure};
use crate::server::error::{AppError, AppResult};
use crate::server::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

#[derive(Deserialize)]
pub struct EventRequest {
    pub site: Option<String>,
    pub payload_range: Option<[f64; 2]>,
}

#[derive(Serialize)]
pub struct FiguresResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proportion: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlation: Option<Value>,
}

impl From<ChartFrame> for FiguresResponse {
    fn from(frame: ChartFrame) -> Self {
        Self {
            proportion: frame.proportion.as_ref().map(proportion_figure),
            correlation: frame.correlation.as_ref().map(correlation_figure),
        }
    }
}

#[derive(Serialize)]
pub struct OpenResponse {
    pub session_id: Uuid,
    pub state: FilterState,
    #[serde(flatten)]
    pub figures: FiguresResponse,
}

pub async fn open(State(state): State<AppState>) -> AppResult<(StatusCode, Json<OpenResponse>)> {
    let (session_id, frame) = state.sessions.open();
    let filter = state
        .sessions
        .state(session_id)
        .ok_or(AppError::SessionNotFound)?;

    Ok((
        StatusCode::CREATED,
        Json(OpenResponse {
            session_id,
            state: filter,
            figures: frame.into(),
        }),
    ))
}

pub async fn state(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> AppResult<Json<FilterState>> {
    state
        .sessions
        .state(session_id)
        .map(Json)
        .ok_or(AppError::SessionNotFound)
}

pub async fn dispatch(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(payload): Json<EventRequest>,
) -> AppResult<Json<FiguresResponse>> {
    // Validate everything before touching the session
    let mut events = Vec::with_capacity(2);
    if let Some(raw) = payload.site.as_deref() {
        let site = SiteSelection::from(raw).validate(state.dataset())?;
        events.push(Event::SiteChanged(site));
    }
    if let Some([low, high]) = payload.payload_range {
        events.push(Event::RangeChanged(PayloadRange::new(low, high)?));
    }

    let frame = state
        .sessions
        .dispatch(session_id, events)
        .ok_or(AppError::SessionNotFound)?;
    Ok(Json(frame.into()))
}

pub async fn close(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> AppResult<StatusCode> {
    if state.sessions.close(session_id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::SessionNotFound)
    }
}

use crate::derive::{outcome_proportion, payload_correlation};
use crate::filter::{PayloadRange, SiteSelection};
use crate::layout::DashboardLayout;
use crate::render::{correlation_figure, proportion_figure};
use crate::server::error::AppResult;
use crate::server::state::AppState;
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize)]
pub struct ChartQuery {
    pub site: Option<String>,
    pub low: Option<f64>,
    pub high: Option<f64>,
}

impl ChartQuery {
    fn selection(&self, state: &AppState) -> AppResult<SiteSelection> {
        let raw = self.site.as_deref().unwrap_or_default();
        let selection = if raw.is_empty() {
            SiteSelection::All
        } else {
            SiteSelection::from(raw)
        };
        Ok(selection.validate(state.dataset())?)
    }

    fn range(&self, state: &AppState) -> AppResult<PayloadRange> {
        let dataset = state.dataset();
        Ok(PayloadRange::new(
            self.low.unwrap_or(dataset.min_payload()),
            self.high.unwrap_or(dataset.max_payload()),
        )?)
    }
}

pub async fn layout(State(state): State<AppState>) -> Json<DashboardLayout> {
    Json(state.layout.as_ref().clone())
}

pub async fn proportion(
    State(state): State<AppState>,
    Query(query): Query<ChartQuery>,
) -> AppResult<Json<Value>> {
    let selection = query.selection(&state)?;
    let chart = outcome_proportion(state.dataset(), &selection);
    Ok(Json(proportion_figure(&chart)))
}

pub async fn correlation(
    State(state): State<AppState>,
    Query(query): Query<ChartQuery>,
) -> AppResult<Json<Value>> {
    let selection = query.selection(&state)?;
    let range = query.range(&state)?;
    let chart = payload_correlation(state.dataset(), &selection, &range);
    Ok(Json(correlation_figure(&chart)))
}

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use warroom_core::models::*;

use crate::api::{ApiContext, ApiError, AppState};

#[derive(Debug, Default, Deserialize)]
pub struct KpiQuery {
    pub period: Option<String>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<KpiQuery>,
) -> Result<Json<Vec<KpiMetric>>, ApiError> {
    let metrics = state
        .storage
        .get_kpi_metrics(state.user_id, query.period.as_deref())
        .context("Fetch KPI metrics")?;
    Ok(Json(metrics))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CreateKpiMetricInput>, JsonRejection>,
) -> Result<(StatusCode, Json<KpiMetric>), ApiError> {
    const ACTION: &str = "Record KPI metric";
    let Json(input) = body.context(ACTION)?;
    input.validate().context(ACTION)?;

    let metric = state
        .storage
        .create_kpi_metric(state.user_id, input)
        .context(ACTION)?;
    Ok((StatusCode::CREATED, Json(metric)))
}

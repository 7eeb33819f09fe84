use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};
use uuid::Uuid;
use warroom_core::models::*;

use crate::api::{ApiContext, ApiError, AppState};

pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<Vec<LeadIntelligence>>, ApiError> {
    let leads = state.storage.get_leads(state.user_id).context("Fetch leads")?;
    Ok(Json(leads))
}

pub async fn get_one(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<LeadIntelligence>, ApiError> {
    const ACTION: &str = "Fetch lead";
    let Path(id) = path.context(ACTION)?;
    state
        .storage
        .get_lead(id)
        .context(ACTION)?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(ACTION, "Lead"))
}

/// Every call is recorded as its own campaign, even for a repeated query.
pub async fn search(
    State(state): State<AppState>,
    body: Result<Json<LeadSearchParams>, JsonRejection>,
) -> Result<Json<LeadSearchResult>, ApiError> {
    const ACTION: &str = "Lead search";
    let Json(params) = body.context(ACTION)?;

    let result = state
        .storage
        .search_leads(state.user_id, params)
        .context(ACTION)?;
    Ok(Json(result))
}

pub async fn enrich(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<LeadIntelligence>, ApiError> {
    const ACTION: &str = "Lead enrichment";
    let Path(id) = path.context(ACTION)?;
    let lead = state.storage.enrich_lead(id).context(ACTION)?;
    Ok(Json(lead))
}

pub async fn campaigns(
    State(state): State<AppState>,
) -> Result<Json<Vec<SearchCampaign>>, ApiError> {
    let campaigns = state
        .storage
        .get_search_campaigns(state.user_id)
        .context("Fetch search campaigns")?;
    Ok(Json(campaigns))
}

use crate::error::ApiError;
use crate::models::{InvestmentSuggestion, SuggestionQuery};
use crate::services::suggestions;
use crate::state::AppState;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use rust_decimal::Decimal;
use std::str::FromStr;

pub async fn list_suggestions(
    State(state): State<AppState>,
    query: Result<Query<SuggestionQuery>, QueryRejection>,
) -> Result<Json<Vec<InvestmentSuggestion>>, ApiError> {
    let Query(query) = query?;
    let amount = parse_amount(query.amount.as_deref())?;

    let assets = state.store.assets_snapshot().await;
    tracing::debug!("Suggesting allocation of {} across {} assets", amount, assets.len());
    let suggestions = suggestions::suggest(amount, &assets)
        .inspect_err(|e| tracing::warn!("Suggestion failed: {}", e))?;
    Ok(Json(suggestions))
}

fn parse_amount(raw: Option<&str>) -> Result<Decimal, ApiError> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::BadRequest("missing amount query parameter".to_string()))?;

    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .map_err(|e| ApiError::BadRequest(e.to_string()))
}

use crate::error::ApiError;
use crate::models::Portfolio;
use crate::services::portfolio;
use crate::state::AppState;
use axum::{extract::State, Json};

pub async fn get_portfolio(State(state): State<AppState>) -> Result<Json<Portfolio>, ApiError> {
    let assets = state.store.assets_snapshot().await;
    let summary = portfolio::summarize(&assets)
        .inspect_err(|e| tracing::warn!("Portfolio summary failed: {}", e))?;
    Ok(Json(summary))
}

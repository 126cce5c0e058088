use crate::error::ApiError;
use crate::models::{Asset, AssetFilter};
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};

pub async fn list_assets(
    State(state): State<AppState>,
    filter: Result<Query<AssetFilter>, QueryRejection>,
) -> Result<Json<Vec<Asset>>, ApiError> {
    let Query(filter) = filter?;
    let assets = state.store.list_assets(&filter).await;
    tracing::debug!("Listing {} assets (type filter: {:?})", assets.len(), filter.asset_type);
    Ok(Json(assets))
}

pub async fn create_asset(
    State(state): State<AppState>,
    payload: Result<Json<Asset>, JsonRejection>,
) -> Result<(StatusCode, Json<Asset>), ApiError> {
    let Json(asset) = payload?;
    let asset = state.store.add_asset(asset).await;
    tracing::info!("Added asset {}", asset.ticker);
    Ok((StatusCode::CREATED, Json(asset)))
}

/// Replaces the first asset carrying the id from the path.
pub async fn update_asset(
    State(state): State<AppState>,
    asset_id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<Asset>, JsonRejection>,
) -> Result<Json<Asset>, ApiError> {
    let Path(asset_id) = asset_id?;
    let Json(asset) = payload?;

    let asset = state
        .store
        .replace_asset_by_id(asset_id, asset)
        .await
        .inspect_err(|e| tracing::warn!("Asset update missed: {}", e))?;
    tracing::info!("Replaced asset {}", asset_id);
    Ok(Json(asset))
}

/// Replaces the first asset whose ticker matches the body's ticker.
pub async fn update_asset_by_ticker(
    State(state): State<AppState>,
    payload: Result<Json<Asset>, JsonRejection>,
) -> Result<Json<Asset>, ApiError> {
    let Json(asset) = payload?;

    let asset = state
        .store
        .replace_asset_by_ticker(asset)
        .await
        .inspect_err(|e| tracing::warn!("Asset update missed: {}", e))?;
    tracing::info!("Replaced asset {}", asset.ticker);
    Ok(Json(asset))
}

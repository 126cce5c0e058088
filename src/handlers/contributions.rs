use crate::error::ApiError;
use crate::models::Contribution;
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};

pub async fn latest_contribution(
    State(state): State<AppState>,
    user_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Contribution>, ApiError> {
    let Path(user_id) = user_id?;

    match state.store.latest_contribution(user_id).await {
        Some(contribution) => Ok(Json(contribution)),
        None => {
            tracing::warn!("No contribution recorded for user {}", user_id);
            Err(ApiError::NotFound(format!(
                "no contribution found for user {}",
                user_id
            )))
        }
    }
}

pub async fn create_contribution(
    State(state): State<AppState>,
    payload: Result<Json<Contribution>, JsonRejection>,
) -> Result<(StatusCode, Json<Contribution>), ApiError> {
    let Json(contribution) = payload?;
    let contribution = state.store.add_contribution(contribution).await;
    tracing::info!(
        "Recorded contribution of {} for user {}",
        contribution.amount,
        contribution.user_id
    );
    Ok((StatusCode::CREATED, Json(contribution)))
}

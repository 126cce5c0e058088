use crate::error::ApiError;
use crate::models::AssetQuestionAnswer;
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};

pub async fn list_answers(
    State(state): State<AppState>,
    asset_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Vec<AssetQuestionAnswer>>, ApiError> {
    let Path(asset_id) = asset_id?;
    Ok(Json(state.store.answers_for_asset(asset_id).await))
}

pub async fn create_answer(
    State(state): State<AppState>,
    payload: Result<Json<AssetQuestionAnswer>, JsonRejection>,
) -> Result<(StatusCode, Json<AssetQuestionAnswer>), ApiError> {
    let Json(answer) = payload?;
    let answer = state.store.add_answer(answer).await;
    tracing::info!(
        "Recorded answer to question {} for asset {}",
        answer.question_id,
        answer.asset_id
    );
    Ok((StatusCode::CREATED, Json(answer)))
}

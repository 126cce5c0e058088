use crate::error::ApiError;
use crate::models::Question;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};

pub async fn list_questions(State(state): State<AppState>) -> Json<Vec<Question>> {
    Json(state.store.questions().await)
}

pub async fn create_question(
    State(state): State<AppState>,
    payload: Result<Json<Question>, JsonRejection>,
) -> Result<(StatusCode, Json<Question>), ApiError> {
    let Json(question) = payload?;
    let question = state.store.add_question(question).await;
    tracing::info!("Added question {} ({})", question.id, question.criterion);
    Ok((StatusCode::CREATED, Json(question)))
}

use crate::error::ApiError;
use crate::models::Goal;
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};

pub async fn list_goals(
    State(state): State<AppState>,
    user_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Vec<Goal>>, ApiError> {
    let Path(user_id) = user_id?;
    Ok(Json(state.store.goals_for_user(user_id).await))
}

pub async fn create_goal(
    State(state): State<AppState>,
    payload: Result<Json<Goal>, JsonRejection>,
) -> Result<(StatusCode, Json<Goal>), ApiError> {
    let Json(goal) = payload?;
    let goal = state.store.add_goal(goal).await;
    tracing::info!("Added goal {} for user {}", goal.id, goal.user_id);
    Ok((StatusCode::CREATED, Json(goal)))
}

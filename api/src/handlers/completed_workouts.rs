//! Completed workout handlers
//!
//! `POST /workouts/:name` records a completion of the named workout. It shares
//! its path with the single-workout GET and DELETE routes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::app::ListPolicy;
use crate::domain::entities::CompletedWorkout;
use crate::error::AppError;
use crate::AppState;

const LIST_POLICY: ListPolicy = ListPolicy::EmptyIsOk;

/// Only read when completions are credited to the requester
#[derive(Debug, Default, Deserialize)]
pub struct RecordCompletionRequest {
    pub username: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CompletedWorkoutsResponse {
    pub completed_workouts: Vec<CompletedWorkout>,
}

#[derive(Debug, Serialize)]
pub struct CompletedWorkoutResponse {
    pub completed_workout: CompletedWorkout,
}

/// POST /workouts/:name
pub async fn record_completion(
    State(state): State<AppState>,
    Path(name): Path<String>,
    payload: Option<Json<RecordCompletionRequest>>,
) -> Result<(StatusCode, Json<CompletedWorkoutResponse>), AppError> {
    let request = payload.map(|Json(body)| body).unwrap_or_default();

    let completed_workout = state
        .completion_recorder
        .record(&name, request.username.as_deref())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CompletedWorkoutResponse { completed_workout }),
    ))
}

/// GET /users/:username/completed_workouts
pub async fn list_user_completed_workouts(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<CompletedWorkoutsResponse>, AppError> {
    let completed_workouts = state
        .completion_recorder
        .list_for_user(&username)
        .await?
        .require(LIST_POLICY, "completed workouts")?;

    Ok(Json(CompletedWorkoutsResponse { completed_workouts }))
}

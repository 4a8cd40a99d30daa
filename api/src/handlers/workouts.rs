//! Workout handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use super::json_body;
use crate::app::{ListPolicy, WorkoutDraft};
use crate::domain::entities::{ExerciseId, UserId, Workout};
use crate::error::AppError;
use crate::AppState;

const LIST_POLICY: ListPolicy = ListPolicy::EmptyIsNotFound;

#[derive(Debug, Deserialize)]
pub struct CreateWorkoutRequest {
    pub name: Option<String>,
    #[serde(default)]
    pub exercises: Vec<ExerciseId>,
    #[serde(default)]
    pub private: bool,
    pub created_by: Option<UserId>,
    pub user_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct WorkoutsResponse {
    pub workouts: Vec<Workout>,
}

#[derive(Debug, Serialize)]
pub struct WorkoutResponse {
    pub workout: Workout,
}

/// GET /workouts
pub async fn list_workouts(
    State(state): State<AppState>,
) -> Result<Json<WorkoutsResponse>, AppError> {
    let workouts = state
        .workout_service
        .list()
        .await?
        .require(LIST_POLICY, "workouts")?;

    Ok(Json(WorkoutsResponse { workouts }))
}

/// GET /workouts/:name
pub async fn get_workout(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<WorkoutResponse>, AppError> {
    let workout = state.workout_service.get(&name).await?;
    Ok(Json(WorkoutResponse { workout }))
}

/// POST /workouts
pub async fn create_workout(
    State(state): State<AppState>,
    payload: Result<Json<CreateWorkoutRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<WorkoutResponse>), AppError> {
    let request = json_body(payload)?;

    let workout = state
        .workout_service
        .create(WorkoutDraft {
            name: request.name,
            exercises: request.exercises,
            private: request.private,
            created_by: request.created_by,
            user_name: request.user_name,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(WorkoutResponse { workout })))
}

/// DELETE /workouts/:name
///
/// Succeeds whether or not the workout existed. Completion records that
/// reference the workout are kept.
pub async fn delete_workout(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<StatusCode, AppError> {
    state.workout_service.delete(&name).await?;
    Ok(StatusCode::NO_CONTENT)
}

//! Exercise handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use super::json_body;
use crate::app::{ExerciseDraft, ListPolicy};
use crate::domain::entities::{Exercise, MuscleId, UserId};
use crate::error::AppError;
use crate::AppState;

const LIST_POLICY: ListPolicy = ListPolicy::EmptyIsNotFound;

#[derive(Debug, Deserialize)]
pub struct CreateExerciseRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub major_muscle: Option<MuscleId>,
    #[serde(default)]
    pub minor_muscles: Vec<MuscleId>,
    pub created_by: Option<UserId>,
}

#[derive(Debug, Serialize)]
pub struct ExercisesResponse {
    pub exercises: Vec<Exercise>,
}

#[derive(Debug, Serialize)]
pub struct ExerciseResponse {
    pub exercise: Exercise,
}

/// GET /exercises
pub async fn list_exercises(
    State(state): State<AppState>,
) -> Result<Json<ExercisesResponse>, AppError> {
    let exercises = state
        .exercise_service
        .list()
        .await?
        .require(LIST_POLICY, "exercises")?;

    Ok(Json(ExercisesResponse { exercises }))
}

/// GET /exercises/:title
///
/// The title is matched after percent-decoding, so `Pull%20Up` finds "Pull Up".
pub async fn get_exercise(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<Json<ExerciseResponse>, AppError> {
    let exercise = state.exercise_service.get(&title).await?;
    Ok(Json(ExerciseResponse { exercise }))
}

/// POST /exercises
pub async fn create_exercise(
    State(state): State<AppState>,
    payload: Result<Json<CreateExerciseRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ExerciseResponse>), AppError> {
    let request = json_body(payload)?;

    let exercise = state
        .exercise_service
        .create(ExerciseDraft {
            title: request.title,
            content: request.content,
            major_muscle: request.major_muscle,
            minor_muscles: request.minor_muscles,
            created_by: request.created_by,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ExerciseResponse { exercise })))
}

/// DELETE /exercises/:title
pub async fn delete_exercise(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<StatusCode, AppError> {
    state.exercise_service.delete(&title).await?;
    Ok(StatusCode::NO_CONTENT)
}

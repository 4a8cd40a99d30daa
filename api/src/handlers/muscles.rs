//! Muscle handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use super::json_body;
use crate::app::{ListPolicy, MuscleDraft};
use crate::domain::entities::Muscle;
use crate::error::AppError;
use crate::AppState;

const LIST_POLICY: ListPolicy = ListPolicy::EmptyIsNotFound;

#[derive(Debug, Deserialize)]
pub struct CreateMuscleRequest {
    pub muscle_name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MusclesResponse {
    pub muscles: Vec<Muscle>,
}

#[derive(Debug, Serialize)]
pub struct MuscleResponse {
    pub muscle: Muscle,
}

/// GET /muscles
pub async fn list_muscles(
    State(state): State<AppState>,
) -> Result<Json<MusclesResponse>, AppError> {
    let muscles = state
        .muscle_service
        .list()
        .await?
        .require(LIST_POLICY, "muscles")?;

    Ok(Json(MusclesResponse { muscles }))
}

/// GET /muscles/:name
pub async fn get_muscle(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<MuscleResponse>, AppError> {
    let muscle = state.muscle_service.get(&name).await?;
    Ok(Json(MuscleResponse { muscle }))
}

/// POST /muscles
pub async fn create_muscle(
    State(state): State<AppState>,
    payload: Result<Json<CreateMuscleRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MuscleResponse>), AppError> {
    let request = json_body(payload)?;

    let muscle = state
        .muscle_service
        .create(MuscleDraft {
            muscle_name: request.muscle_name,
            description: request.description,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(MuscleResponse { muscle })))
}

/// DELETE /muscles/:name
pub async fn delete_muscle(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<StatusCode, AppError> {
    state.muscle_service.delete(&name).await?;
    Ok(StatusCode::NO_CONTENT)
}

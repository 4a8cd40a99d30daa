//! User handlers
//!
//! Endpoints for users and the workouts they created.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use super::json_body;
use crate::app::{ListPolicy, UserDraft};
use crate::domain::entities::{User, Workout};
use crate::error::AppError;
use crate::AppState;

const LIST_POLICY: ListPolicy = ListPolicy::EmptyIsNotFound;
const WORKOUTS_POLICY: ListPolicy = ListPolicy::EmptyIsOk;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub users: Vec<User>,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: User,
}

#[derive(Debug, Serialize)]
pub struct UserWorkoutsResponse {
    pub workouts: Vec<Workout>,
}

/// GET /users
pub async fn list_users(State(state): State<AppState>) -> Result<Json<UsersResponse>, AppError> {
    let users = state
        .user_service
        .list()
        .await?
        .require(LIST_POLICY, "users")?;

    Ok(Json(UsersResponse { users }))
}

/// GET /users/:username
pub async fn get_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.user_service.get(&username).await?;
    Ok(Json(UserResponse { user }))
}

/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let request = json_body(payload)?;

    let user = state
        .user_service
        .create(UserDraft {
            username: request.username,
            name: request.name,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(UserResponse { user })))
}

/// DELETE /users/:username
///
/// Succeeds whether or not the user existed.
pub async fn delete_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<StatusCode, AppError> {
    state.user_service.delete(&username).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /users/:username/workouts
///
/// Workouts created by the user. An existing user with no workouts gets an
/// empty list.
pub async fn list_user_workouts(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<UserWorkoutsResponse>, AppError> {
    let workouts = state
        .user_service
        .workouts_of(&username)
        .await?
        .require(WORKOUTS_POLICY, "workouts")?;

    Ok(Json(UserWorkoutsResponse { workouts }))
}

//! HTTP handlers
//!
//! Axum request handlers for the API endpoints. Every response body is a JSON
//! object with a single key naming the resource, e.g. `{"workouts": [...]}`.

pub mod completed_workouts;
pub mod exercises;
pub mod fallback;
pub mod muscles;
pub mod users;
pub mod workouts;

use axum::{extract::rejection::JsonRejection, Json};

use crate::error::AppError;

pub use completed_workouts::{list_user_completed_workouts, record_completion};
pub use exercises::{create_exercise, delete_exercise, get_exercise, list_exercises};
pub use fallback::{handle_panic, page_not_found};
pub use muscles::{create_muscle, delete_muscle, get_muscle, list_muscles};
pub use users::{create_user, delete_user, get_user, list_user_workouts, list_users};
pub use workouts::{create_workout, delete_workout, get_workout, list_workouts};

/// Undecodable bodies are a bad request like any other missing field
fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(body)| body)
        .map_err(|e| AppError::BadRequest(e.body_text()))
}

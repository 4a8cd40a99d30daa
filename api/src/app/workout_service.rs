//! Workout service

use std::sync::Arc;

use crate::app::listing::Listing;
use crate::app::resolvers::resolve_workout;
use crate::app::validate::{optional_text, required_id, required_text};
use crate::domain::entities::{
    ExerciseId, NewWorkout, UserFilter, UserId, Workout, WorkoutFilter,
};
use crate::domain::ports::{EntityStore, UserRepository, WorkoutRepository};
use crate::error::AppError;

#[derive(Debug, Clone, Default)]
pub struct WorkoutDraft {
    pub name: Option<String>,
    pub exercises: Vec<ExerciseId>,
    pub private: bool,
    pub created_by: Option<UserId>,
    /// Creator's username; looked up from `created_by` when absent
    pub user_name: Option<String>,
}

pub struct WorkoutService {
    workouts: Arc<dyn WorkoutRepository>,
    users: Arc<dyn UserRepository>,
}

impl WorkoutService {
    pub fn new(store: &EntityStore) -> Self {
        Self {
            workouts: store.workouts.clone(),
            users: store.users.clone(),
        }
    }

    pub async fn list(&self) -> Result<Listing<Workout>, AppError> {
        let workouts = self.workouts.find(&WorkoutFilter::all()).await?;
        Ok(Listing::from_vec(workouts))
    }

    pub async fn get(&self, name: &str) -> Result<Workout, AppError> {
        resolve_workout(self.workouts.as_ref(), name)
            .await?
            .map(|resolution| resolution.into_inner())
            .ok_or_else(|| AppError::NotFound("workout not found".to_string()))
    }

    pub async fn create(&self, draft: WorkoutDraft) -> Result<Workout, AppError> {
        let name = required_text(draft.name, "name")?;
        let created_by = required_id(draft.created_by, "created_by")?;
        let user_name = match optional_text(draft.user_name) {
            Some(user_name) => user_name,
            None => self.creator_username(&created_by).await?,
        };

        let new_workout = NewWorkout {
            name,
            exercises: draft.exercises,
            private: draft.private,
            created_by,
            user_name,
        };

        let workout = self.workouts.create(&new_workout).await?;
        tracing::info!(workout_id = %workout.id, name = %workout.name, "Created workout");
        Ok(workout)
    }

    /// Removes every workout with this name. Completion records are left alone.
    pub async fn delete(&self, name: &str) -> Result<u64, AppError> {
        let removed = self.workouts.remove(&WorkoutFilter::by_name(name)).await?;
        tracing::debug!(name, removed, "Deleted workouts");
        Ok(removed)
    }

    /// Empty when no user has this id
    async fn creator_username(&self, id: &UserId) -> Result<String, AppError> {
        let users = self.users.find(&UserFilter::by_id(id.clone())).await?;
        match users.into_iter().next() {
            Some(user) => Ok(user.username),
            None => {
                tracing::warn!(user_id = %id, "Workout creator not found, storing empty user_name");
                Ok(String::new())
            }
        }
    }
}

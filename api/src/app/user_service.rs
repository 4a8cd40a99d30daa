//! User service
//!
//! Lists, looks up, creates and removes users, and lists the workouts a user created.

use std::sync::Arc;

use crate::app::listing::Listing;
use crate::app::resolvers::resolve_user;
use crate::app::validate::{optional_text, required_text};
use crate::domain::entities::{NewUser, User, UserFilter, Workout, WorkoutFilter};
use crate::domain::ports::{EntityStore, UserRepository, WorkoutRepository};
use crate::error::AppError;

/// Unvalidated input for creating a user
#[derive(Debug, Clone, Default)]
pub struct UserDraft {
    pub username: Option<String>,
    pub name: Option<String>,
}

pub struct UserService {
    users: Arc<dyn UserRepository>,
    workouts: Arc<dyn WorkoutRepository>,
}

impl UserService {
    pub fn new(store: &EntityStore) -> Self {
        Self {
            users: store.users.clone(),
            workouts: store.workouts.clone(),
        }
    }

    pub async fn list(&self) -> Result<Listing<User>, AppError> {
        let users = self.users.find(&UserFilter::all()).await?;
        Ok(Listing::from_vec(users))
    }

    pub async fn get(&self, username: &str) -> Result<User, AppError> {
        resolve_user(self.users.as_ref(), username)
            .await?
            .map(|resolution| resolution.into_inner())
            .ok_or_else(|| AppError::NotFound("user not found".to_string()))
    }

    pub async fn create(&self, draft: UserDraft) -> Result<User, AppError> {
        let new_user = NewUser {
            username: required_text(draft.username, "username")?,
            name: optional_text(draft.name),
        };

        let user = self.users.create(&new_user).await?;
        tracing::info!(user_id = %user.id, username = %user.username, "Created user");
        Ok(user)
    }

    /// Removes every user with this username. Succeeds when none exist.
    pub async fn delete(&self, username: &str) -> Result<u64, AppError> {
        let removed = self.users.remove(&UserFilter::by_username(username)).await?;
        tracing::debug!(username, removed, "Deleted users");
        Ok(removed)
    }

    /// Workouts created by the user with this username
    pub async fn workouts_of(&self, username: &str) -> Result<Listing<Workout>, AppError> {
        let user = self.get(username).await?;
        let workouts = self
            .workouts
            .find(&WorkoutFilter::by_creator(user.id))
            .await?;
        Ok(Listing::from_vec(workouts))
    }
}

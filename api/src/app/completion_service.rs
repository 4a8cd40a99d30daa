//! Completion recorder
//!
//! Records that a workout was completed and lists a user's completions.
//!
//! Recording is two store calls: resolve the workout by name, then write the
//! completion. They are not atomic. If the workout is deleted between the two
//! calls the new record points at a workout that no longer exists; nothing
//! guards against this and nothing cleans it up.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::app::listing::Listing;
use crate::app::resolvers::{resolve_user, resolve_workout};
use crate::domain::entities::{
    CompletedWorkout, CompletedWorkoutFilter, NewCompletedWorkout, UserId, Workout,
};
use crate::domain::ports::{
    CompletedWorkoutRepository, EntityStore, UserRepository, WorkoutRepository,
};
use crate::error::AppError;

/// Who a completion record is credited to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionAttribution {
    /// The workout's creator, whoever sent the request
    #[default]
    WorkoutCreator,
    /// The user named in the request
    Requester,
}

impl std::fmt::Display for CompletionAttribution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompletionAttribution::WorkoutCreator => write!(f, "workout_creator"),
            CompletionAttribution::Requester => write!(f, "requester"),
        }
    }
}

impl std::str::FromStr for CompletionAttribution {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "workout_creator" => Ok(CompletionAttribution::WorkoutCreator),
            "requester" => Ok(CompletionAttribution::Requester),
            _ => Err(format!("Unknown completion attribution: {}", s)),
        }
    }
}

pub struct CompletionRecorder {
    workouts: Arc<dyn WorkoutRepository>,
    users: Arc<dyn UserRepository>,
    completed: Arc<dyn CompletedWorkoutRepository>,
    attribution: CompletionAttribution,
}

impl CompletionRecorder {
    pub fn new(store: &EntityStore, attribution: CompletionAttribution) -> Self {
        Self {
            workouts: store.workouts.clone(),
            users: store.users.clone(),
            completed: store.completed_workouts.clone(),
            attribution,
        }
    }

    pub fn attribution(&self) -> CompletionAttribution {
        self.attribution
    }

    /// Record a completion of the workout named `workout_name`.
    ///
    /// `requester` is only consulted under `CompletionAttribution::Requester`,
    /// where it is required and must name an existing user.
    pub async fn record(
        &self,
        workout_name: &str,
        requester: Option<&str>,
    ) -> Result<CompletedWorkout, AppError> {
        let workout = resolve_workout(self.workouts.as_ref(), workout_name)
            .await?
            .map(|resolution| resolution.into_inner())
            .ok_or_else(|| AppError::NotFound("workout not found".to_string()))?;

        let (user_id, user_name) = self.credited_user(&workout, requester).await?;

        let new_completion = NewCompletedWorkout {
            workout: workout.id,
            user_id,
            user_name,
        };

        let completed = self.completed.create(&new_completion).await?;
        tracing::info!(
            completion_id = %completed.id,
            workout_id = %completed.workout,
            user_name = %completed.user_name,
            attribution = %self.attribution,
            "Recorded completed workout"
        );
        Ok(completed)
    }

    async fn credited_user(
        &self,
        workout: &Workout,
        requester: Option<&str>,
    ) -> Result<(UserId, String), AppError> {
        match self.attribution {
            CompletionAttribution::WorkoutCreator => {
                Ok((workout.created_by.clone(), workout.user_name.clone()))
            }
            CompletionAttribution::Requester => {
                let username = requester
                    .filter(|name| !name.trim().is_empty())
                    .ok_or_else(|| AppError::BadRequest("username is required".to_string()))?;
                let user = resolve_user(self.users.as_ref(), username)
                    .await?
                    .map(|resolution| resolution.into_inner())
                    .ok_or_else(|| AppError::NotFound("user not found".to_string()))?;
                Ok((user.id, user.username))
            }
        }
    }

    /// Completions credited to `username`. The user does not have to exist.
    pub async fn list_for_user(
        &self,
        username: &str,
    ) -> Result<Listing<CompletedWorkout>, AppError> {
        let completed = self
            .completed
            .find(&CompletedWorkoutFilter::by_user_name(username))
            .await?;
        Ok(Listing::from_vec(completed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{new_user, new_workout_for, InMemoryStore};

    #[tokio::test]
    async fn credits_workout_creator_by_default() {
        let (memory, store) = InMemoryStore::handle();
        let alice = memory.insert_user(new_user("alice"));
        let bob = memory.insert_user(new_user("bob"));
        let workout = memory.insert_workout(new_workout_for("new", &alice));
        let recorder = CompletionRecorder::new(&store, CompletionAttribution::default());

        // Bob asking makes no difference
        let completed = recorder.record("new", Some(&bob.username)).await.unwrap();

        assert_eq!(completed.workout, workout.id);
        assert_eq!(completed.user_id, alice.id);
        assert_eq!(completed.user_name, "alice");
        assert_eq!(memory.completed_workouts().len(), 1);
    }

    #[tokio::test]
    async fn copies_denormalized_fields_even_without_user_document() {
        let (memory, store) = InMemoryStore::handle();
        let creator = UserId::from("u1");
        let workout = memory.insert_workout(crate::domain::entities::NewWorkout {
            name: "new".to_string(),
            exercises: vec![],
            private: false,
            created_by: creator.clone(),
            user_name: "alice".to_string(),
        });
        let recorder = CompletionRecorder::new(&store, CompletionAttribution::WorkoutCreator);

        let completed = recorder.record("new", None).await.unwrap();

        assert_eq!(completed.workout, workout.id);
        assert_eq!(completed.user_id, creator);
        assert_eq!(completed.user_name, "alice");
    }

    #[tokio::test]
    async fn unknown_workout_writes_nothing() {
        let (memory, store) = InMemoryStore::handle();
        let recorder = CompletionRecorder::new(&store, CompletionAttribution::default());

        let err = recorder.record("nope", None).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(msg) if msg == "workout not found"));
        assert!(memory.completed_workouts().is_empty());
    }

    #[tokio::test]
    async fn requester_mode_credits_requester() {
        let (memory, store) = InMemoryStore::handle();
        let alice = memory.insert_user(new_user("alice"));
        let bob = memory.insert_user(new_user("bob"));
        memory.insert_workout(new_workout_for("new", &alice));
        let recorder = CompletionRecorder::new(&store, CompletionAttribution::Requester);

        let completed = recorder.record("new", Some("bob")).await.unwrap();

        assert_eq!(completed.user_id, bob.id);
        assert_eq!(completed.user_name, "bob");
    }

    #[tokio::test]
    async fn requester_mode_needs_known_requester() {
        let (memory, store) = InMemoryStore::handle();
        let alice = memory.insert_user(new_user("alice"));
        memory.insert_workout(new_workout_for("new", &alice));
        let recorder = CompletionRecorder::new(&store, CompletionAttribution::Requester);

        assert!(matches!(
            recorder.record("new", None).await.unwrap_err(),
            AppError::BadRequest(_)
        ));
        assert!(matches!(
            recorder.record("new", Some("ghost")).await.unwrap_err(),
            AppError::NotFound(msg) if msg == "user not found"
        ));
        assert!(memory.completed_workouts().is_empty());
    }

    #[tokio::test]
    async fn list_for_user_returns_exact_matches() {
        let (memory, store) = InMemoryStore::handle();
        let alice = memory.insert_user(new_user("alice"));
        let bob = memory.insert_user(new_user("bob"));
        memory.insert_workout(new_workout_for("legs", &alice));
        memory.insert_workout(new_workout_for("arms", &bob));
        let recorder = CompletionRecorder::new(&store, CompletionAttribution::default());

        let first = recorder.record("legs", None).await.unwrap();
        recorder.record("arms", None).await.unwrap();
        let second = recorder.record("legs", None).await.unwrap();

        let listing = recorder.list_for_user("alice").await.unwrap();
        assert_eq!(listing, Listing::Items(vec![first, second]));

        assert!(recorder.list_for_user("carol").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn completions_survive_workout_deletion() {
        let (memory, store) = InMemoryStore::handle();
        let alice = memory.insert_user(new_user("alice"));
        memory.insert_workout(new_workout_for("new", &alice));
        let recorder = CompletionRecorder::new(&store, CompletionAttribution::default());
        let completed = recorder.record("new", None).await.unwrap();

        store
            .workouts
            .remove(&crate::domain::entities::WorkoutFilter::by_name("new"))
            .await
            .unwrap();

        let listing = recorder.list_for_user("alice").await.unwrap();
        assert_eq!(listing, Listing::Items(vec![completed]));
    }
}

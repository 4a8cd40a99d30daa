//! Repository port traits
//!
//! Each stored collection exposes the same three operations:
//! `find` returns every match in scan order (empty when nothing matches),
//! `create` assigns an id and returns the stored document, and `remove`
//! deletes every match and reports how many went away (zero is not an error).
//!
//! There are no transactions and no multi-document writes.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{
    CompletedWorkout, CompletedWorkoutFilter, Exercise, ExerciseFilter, Muscle, MuscleFilter,
    NewCompletedWorkout, NewExercise, NewMuscle, NewUser, NewWorkout, User, UserFilter, Workout,
    WorkoutFilter,
};
use crate::error::DomainError;

/// Repository for User documents
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find(&self, filter: &UserFilter) -> Result<Vec<User>, DomainError>;

    async fn create(&self, user: &NewUser) -> Result<User, DomainError>;

    async fn remove(&self, filter: &UserFilter) -> Result<u64, DomainError>;
}

/// Repository for Muscle documents
#[async_trait]
pub trait MuscleRepository: Send + Sync {
    async fn find(&self, filter: &MuscleFilter) -> Result<Vec<Muscle>, DomainError>;

    async fn create(&self, muscle: &NewMuscle) -> Result<Muscle, DomainError>;

    async fn remove(&self, filter: &MuscleFilter) -> Result<u64, DomainError>;
}

/// Repository for Exercise documents
#[async_trait]
pub trait ExerciseRepository: Send + Sync {
    async fn find(&self, filter: &ExerciseFilter) -> Result<Vec<Exercise>, DomainError>;

    async fn create(&self, exercise: &NewExercise) -> Result<Exercise, DomainError>;

    async fn remove(&self, filter: &ExerciseFilter) -> Result<u64, DomainError>;
}

/// Repository for Workout documents
#[async_trait]
pub trait WorkoutRepository: Send + Sync {
    async fn find(&self, filter: &WorkoutFilter) -> Result<Vec<Workout>, DomainError>;

    async fn create(&self, workout: &NewWorkout) -> Result<Workout, DomainError>;

    /// Does not touch completion records that reference the removed workouts
    async fn remove(&self, filter: &WorkoutFilter) -> Result<u64, DomainError>;
}

/// Repository for CompletedWorkout documents
#[async_trait]
pub trait CompletedWorkoutRepository: Send + Sync {
    async fn find(
        &self,
        filter: &CompletedWorkoutFilter,
    ) -> Result<Vec<CompletedWorkout>, DomainError>;

    async fn create(
        &self,
        completed: &NewCompletedWorkout,
    ) -> Result<CompletedWorkout, DomainError>;

    async fn remove(&self, filter: &CompletedWorkoutFilter) -> Result<u64, DomainError>;
}

//! Entity store handle
//!
//! Bundles one repository per collection behind trait objects so the whole
//! store can be handed to services explicitly and swapped out in tests.

use std::sync::Arc;

use super::{
    CompletedWorkoutRepository, ExerciseRepository, MuscleRepository, UserRepository,
    WorkoutRepository,
};

#[derive(Clone)]
pub struct EntityStore {
    pub users: Arc<dyn UserRepository>,
    pub muscles: Arc<dyn MuscleRepository>,
    pub exercises: Arc<dyn ExerciseRepository>,
    pub workouts: Arc<dyn WorkoutRepository>,
    pub completed_workouts: Arc<dyn CompletedWorkoutRepository>,
}

impl EntityStore {
    /// Build a handle where a single backend serves every collection
    pub fn shared<S>(backend: Arc<S>) -> Self
    where
        S: UserRepository
            + MuscleRepository
            + ExerciseRepository
            + WorkoutRepository
            + CompletedWorkoutRepository
            + 'static,
    {
        Self {
            users: backend.clone(),
            muscles: backend.clone(),
            exercises: backend.clone(),
            workouts: backend.clone(),
            completed_workouts: backend,
        }
    }
}

//! Domain entities
//!
//! Pure domain models for the five stored collections.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod completed_workout;
pub mod exercise;
pub mod muscle;
pub mod user;
pub mod workout;

pub use completed_workout::{
    CompletedWorkout, CompletedWorkoutFilter, CompletedWorkoutId, NewCompletedWorkout,
};
pub use exercise::{Exercise, ExerciseFilter, ExerciseId, NewExercise};
pub use muscle::{Muscle, MuscleFilter, MuscleId, NewMuscle};
pub use user::{NewUser, User, UserFilter, UserId};
pub use workout::{NewWorkout, Workout, WorkoutFilter, WorkoutId};

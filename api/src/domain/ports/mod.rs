//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod repositories;
pub mod store;

pub use repositories::{
    CompletedWorkoutRepository, ExerciseRepository, MuscleRepository, UserRepository,
    WorkoutRepository,
};
pub use store::EntityStore;

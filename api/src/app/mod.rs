//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services compose the entity store ports and the lookup resolvers.

pub mod completion_service;
pub mod exercise_service;
pub mod listing;
pub mod muscle_service;
pub mod resolvers;
pub mod user_service;
pub mod validate;
pub mod workout_service;

pub use completion_service::{CompletionAttribution, CompletionRecorder};
pub use exercise_service::{ExerciseDraft, ExerciseService};
pub use listing::{ListPolicy, Listing};
pub use muscle_service::{MuscleDraft, MuscleService};
pub use user_service::{UserDraft, UserService};
pub use workout_service::{WorkoutDraft, WorkoutService};

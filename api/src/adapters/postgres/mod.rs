//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.
//! Every `find` returns rows in insertion order (by the `seq` column), which
//! is the scan order the lookup resolvers rely on.

pub mod completed_workout_repo;
pub mod exercise_repo;
mod id_list;
pub mod muscle_repo;
pub mod schema;
pub mod user_repo;
pub mod workout_repo;


use std::sync::Arc;

use sea_orm::DatabaseConnection;

pub use completed_workout_repo::PostgresCompletedWorkoutRepository;
pub use exercise_repo::PostgresExerciseRepository;
pub use muscle_repo::PostgresMuscleRepository;
pub use schema::ensure_schema;
pub use user_repo::PostgresUserRepository;
pub use workout_repo::PostgresWorkoutRepository;

use crate::domain::ports::EntityStore;

impl EntityStore {
    /// Entity store backed by one PostgreSQL connection pool
    pub fn postgres(db: DatabaseConnection) -> Self {
        Self {
            users: Arc::new(PostgresUserRepository::new(db.clone())),
            muscles: Arc::new(PostgresMuscleRepository::new(db.clone())),
            exercises: Arc::new(PostgresExerciseRepository::new(db.clone())),
            workouts: Arc::new(PostgresWorkoutRepository::new(db.clone())),
            completed_workouts: Arc::new(PostgresCompletedWorkoutRepository::new(db)),
        }
    }
}

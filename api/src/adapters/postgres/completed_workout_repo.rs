//! PostgreSQL adapter for CompletedWorkoutRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, NotSet,
    QueryFilter, QueryOrder, Set,
};

use crate::domain::entities::{
    CompletedWorkout, CompletedWorkoutFilter, CompletedWorkoutId, NewCompletedWorkout, UserId,
    WorkoutId,
};
use crate::domain::ports::CompletedWorkoutRepository;
use crate::entity::completed_workouts;
use crate::error::DomainError;

/// PostgreSQL implementation of CompletedWorkoutRepository
pub struct PostgresCompletedWorkoutRepository {
    db: DatabaseConnection,
}

impl PostgresCompletedWorkoutRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn condition(filter: &CompletedWorkoutFilter) -> Condition {
    let mut condition = Condition::all();
    if let Some(workout) = &filter.workout {
        condition = condition.add(completed_workouts::Column::WorkoutId.eq(workout.as_str()));
    }
    if let Some(user_name) = &filter.user_name {
        condition = condition.add(completed_workouts::Column::UserName.eq(user_name.as_str()));
    }
    condition
}

#[async_trait]
impl CompletedWorkoutRepository for PostgresCompletedWorkoutRepository {
    async fn find(
        &self,
        filter: &CompletedWorkoutFilter,
    ) -> Result<Vec<CompletedWorkout>, DomainError> {
        let results = completed_workouts::Entity::find()
            .filter(condition(filter))
            .order_by_asc(completed_workouts::Column::Seq)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn create(
        &self,
        completed: &NewCompletedWorkout,
    ) -> Result<CompletedWorkout, DomainError> {
        let model = completed_workouts::ActiveModel {
            id: Set(CompletedWorkoutId::new().0),
            seq: NotSet,
            workout_id: Set(completed.workout.0.clone()),
            user_id: Set(completed.user_id.0.clone()),
            user_name: Set(completed.user_name.clone()),
            completed_at: Set(Utc::now().fixed_offset()),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn remove(&self, filter: &CompletedWorkoutFilter) -> Result<u64, DomainError> {
        let result = completed_workouts::Entity::delete_many()
            .filter(condition(filter))
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.rows_affected)
    }
}

impl From<completed_workouts::Model> for CompletedWorkout {
    fn from(model: completed_workouts::Model) -> Self {
        CompletedWorkout {
            id: CompletedWorkoutId(model.id),
            workout: WorkoutId(model.workout_id),
            user_id: UserId(model.user_id),
            user_name: model.user_name,
            completed_at: model.completed_at.with_timezone(&Utc),
        }
    }
}

//! PostgreSQL adapter for WorkoutRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, NotSet,
    QueryFilter, QueryOrder, Set,
};

use super::id_list::{decode_ids, encode_ids};
use crate::domain::entities::{NewWorkout, UserId, Workout, WorkoutFilter, WorkoutId};
use crate::domain::ports::WorkoutRepository;
use crate::entity::workouts;
use crate::error::DomainError;

/// PostgreSQL implementation of WorkoutRepository
pub struct PostgresWorkoutRepository {
    db: DatabaseConnection,
}

impl PostgresWorkoutRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn condition(filter: &WorkoutFilter) -> Condition {
    let mut condition = Condition::all();
    if let Some(id) = &filter.id {
        condition = condition.add(workouts::Column::Id.eq(id.as_str()));
    }
    if let Some(name) = &filter.name {
        condition = condition.add(workouts::Column::Name.eq(name.as_str()));
    }
    if let Some(user) = &filter.created_by {
        condition = condition.add(workouts::Column::CreatedBy.eq(user.as_str()));
    }
    condition
}

#[async_trait]
impl WorkoutRepository for PostgresWorkoutRepository {
    async fn find(&self, filter: &WorkoutFilter) -> Result<Vec<Workout>, DomainError> {
        let results = workouts::Entity::find()
            .filter(condition(filter))
            .order_by_asc(workouts::Column::Seq)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn create(&self, workout: &NewWorkout) -> Result<Workout, DomainError> {
        let model = workouts::ActiveModel {
            id: Set(WorkoutId::new().0),
            seq: NotSet,
            name: Set(workout.name.clone()),
            exercises: Set(encode_ids(&workout.exercises)?),
            private: Set(workout.private),
            created_by: Set(workout.created_by.0.clone()),
            user_name: Set(workout.user_name.clone()),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn remove(&self, filter: &WorkoutFilter) -> Result<u64, DomainError> {
        let result = workouts::Entity::delete_many()
            .filter(condition(filter))
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.rows_affected)
    }
}

impl From<workouts::Model> for Workout {
    fn from(model: workouts::Model) -> Self {
        Workout {
            id: WorkoutId(model.id),
            name: model.name,
            exercises: decode_ids(model.exercises),
            private: model.private,
            created_by: UserId(model.created_by),
            user_name: model.user_name,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

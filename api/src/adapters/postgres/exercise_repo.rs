//! PostgreSQL adapter for ExerciseRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, NotSet,
    QueryFilter, QueryOrder, Set,
};

use super::id_list::{decode_ids, encode_ids};
use crate::domain::entities::{Exercise, ExerciseFilter, ExerciseId, MuscleId, NewExercise, UserId};
use crate::domain::ports::ExerciseRepository;
use crate::entity::exercises;
use crate::error::DomainError;

/// PostgreSQL implementation of ExerciseRepository
pub struct PostgresExerciseRepository {
    db: DatabaseConnection,
}

impl PostgresExerciseRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn condition(filter: &ExerciseFilter) -> Condition {
    let mut condition = Condition::all();
    if let Some(id) = &filter.id {
        condition = condition.add(exercises::Column::Id.eq(id.as_str()));
    }
    if let Some(title) = &filter.title {
        condition = condition.add(exercises::Column::Title.eq(title.as_str()));
    }
    if let Some(user) = &filter.created_by {
        condition = condition.add(exercises::Column::CreatedBy.eq(user.as_str()));
    }
    condition
}

#[async_trait]
impl ExerciseRepository for PostgresExerciseRepository {
    async fn find(&self, filter: &ExerciseFilter) -> Result<Vec<Exercise>, DomainError> {
        let results = exercises::Entity::find()
            .filter(condition(filter))
            .order_by_asc(exercises::Column::Seq)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn create(&self, exercise: &NewExercise) -> Result<Exercise, DomainError> {
        let model = exercises::ActiveModel {
            id: Set(ExerciseId::new().0),
            seq: NotSet,
            title: Set(exercise.title.clone()),
            content: Set(exercise.content.clone()),
            major_muscle: Set(exercise.major_muscle.as_ref().map(|m| m.0.clone())),
            minor_muscles: Set(encode_ids(&exercise.minor_muscles)?),
            created_by: Set(exercise.created_by.0.clone()),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn remove(&self, filter: &ExerciseFilter) -> Result<u64, DomainError> {
        let result = exercises::Entity::delete_many()
            .filter(condition(filter))
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.rows_affected)
    }
}

impl From<exercises::Model> for Exercise {
    fn from(model: exercises::Model) -> Self {
        Exercise {
            id: ExerciseId(model.id),
            title: model.title,
            content: model.content,
            major_muscle: model.major_muscle.map(MuscleId),
            minor_muscles: decode_ids(model.minor_muscles),
            created_by: UserId(model.created_by),
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

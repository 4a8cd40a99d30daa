//! PostgreSQL adapter for MuscleRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, NotSet,
    QueryFilter, QueryOrder, Set,
};

use crate::domain::entities::{Muscle, MuscleFilter, MuscleId, NewMuscle};
use crate::domain::ports::MuscleRepository;
use crate::entity::muscles;
use crate::error::DomainError;

/// PostgreSQL implementation of MuscleRepository
pub struct PostgresMuscleRepository {
    db: DatabaseConnection,
}

impl PostgresMuscleRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn condition(filter: &MuscleFilter) -> Condition {
    let mut condition = Condition::all();
    if let Some(id) = &filter.id {
        condition = condition.add(muscles::Column::Id.eq(id.as_str()));
    }
    if let Some(name) = &filter.muscle_name {
        condition = condition.add(muscles::Column::MuscleName.eq(name.as_str()));
    }
    condition
}

#[async_trait]
impl MuscleRepository for PostgresMuscleRepository {
    async fn find(&self, filter: &MuscleFilter) -> Result<Vec<Muscle>, DomainError> {
        let results = muscles::Entity::find()
            .filter(condition(filter))
            .order_by_asc(muscles::Column::Seq)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn create(&self, muscle: &NewMuscle) -> Result<Muscle, DomainError> {
        let model = muscles::ActiveModel {
            id: Set(MuscleId::new().0),
            seq: NotSet,
            muscle_name: Set(muscle.muscle_name.clone()),
            description: Set(muscle.description.clone()),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn remove(&self, filter: &MuscleFilter) -> Result<u64, DomainError> {
        let result = muscles::Entity::delete_many()
            .filter(condition(filter))
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.rows_affected)
    }
}

impl From<muscles::Model> for Muscle {
    fn from(model: muscles::Model) -> Self {
        Muscle {
            id: MuscleId(model.id),
            muscle_name: model.muscle_name,
            description: model.description,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

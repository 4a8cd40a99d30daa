//! PostgreSQL adapter for UserRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, NotSet,
    QueryFilter, QueryOrder, Set,
};

use crate::domain::entities::{NewUser, User, UserFilter, UserId};
use crate::domain::ports::UserRepository;
use crate::entity::users;
use crate::error::DomainError;

/// PostgreSQL implementation of UserRepository
pub struct PostgresUserRepository {
    db: DatabaseConnection,
}

impl PostgresUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn condition(filter: &UserFilter) -> Condition {
    let mut condition = Condition::all();
    if let Some(id) = &filter.id {
        condition = condition.add(users::Column::Id.eq(id.as_str()));
    }
    if let Some(username) = &filter.username {
        condition = condition.add(users::Column::Username.eq(username.as_str()));
    }
    condition
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find(&self, filter: &UserFilter) -> Result<Vec<User>, DomainError> {
        let results = users::Entity::find()
            .filter(condition(filter))
            .order_by_asc(users::Column::Seq)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn create(&self, user: &NewUser) -> Result<User, DomainError> {
        let model = users::ActiveModel {
            id: Set(UserId::new().0),
            seq: NotSet,
            username: Set(user.username.clone()),
            name: Set(user.name.clone()),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn remove(&self, filter: &UserFilter) -> Result<u64, DomainError> {
        let result = users::Entity::delete_many()
            .filter(condition(filter))
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.rows_affected)
    }
}

/// Convert SeaORM model to domain entity
impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        User {
            id: UserId(model.id),
            username: model.username,
            name: model.name,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

//! Exercise service

use std::sync::Arc;

use crate::app::listing::Listing;
use crate::app::resolvers::resolve_exercise;
use crate::app::validate::{optional_text, required_id, required_text};
use crate::domain::entities::{Exercise, ExerciseFilter, MuscleId, NewExercise, UserId};
use crate::domain::ports::{EntityStore, ExerciseRepository};
use crate::error::AppError;

#[derive(Debug, Clone, Default)]
pub struct ExerciseDraft {
    pub title: Option<String>,
    pub content: Option<String>,
    pub major_muscle: Option<MuscleId>,
    pub minor_muscles: Vec<MuscleId>,
    pub created_by: Option<UserId>,
}

pub struct ExerciseService {
    exercises: Arc<dyn ExerciseRepository>,
}

impl ExerciseService {
    pub fn new(store: &EntityStore) -> Self {
        Self {
            exercises: store.exercises.clone(),
        }
    }

    pub async fn list(&self) -> Result<Listing<Exercise>, AppError> {
        let exercises = self.exercises.find(&ExerciseFilter::all()).await?;
        Ok(Listing::from_vec(exercises))
    }

    pub async fn get(&self, title: &str) -> Result<Exercise, AppError> {
        resolve_exercise(self.exercises.as_ref(), title)
            .await?
            .map(|resolution| resolution.into_inner())
            .ok_or_else(|| AppError::NotFound("exercise not found".to_string()))
    }

    /// Muscle references are stored as given without checking they exist
    pub async fn create(&self, draft: ExerciseDraft) -> Result<Exercise, AppError> {
        let new_exercise = NewExercise {
            title: required_text(draft.title, "title")?,
            created_by: required_id(draft.created_by, "created_by")?,
            content: optional_text(draft.content),
            major_muscle: draft.major_muscle,
            minor_muscles: draft.minor_muscles,
        };

        let exercise = self.exercises.create(&new_exercise).await?;
        tracing::info!(exercise_id = %exercise.id, title = %exercise.title, "Created exercise");
        Ok(exercise)
    }

    pub async fn delete(&self, title: &str) -> Result<u64, AppError> {
        let removed = self.exercises.remove(&ExerciseFilter::by_title(title)).await?;
        tracing::debug!(title, removed, "Deleted exercises");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::InMemoryStore;

    fn pull_up(created_by: UserId) -> ExerciseDraft {
        ExerciseDraft {
            title: Some("Pull Up".to_string()),
            content: Some("Hang from the bar and pull".to_string()),
            major_muscle: Some(MuscleId::new()),
            minor_muscles: vec![MuscleId::new(), MuscleId::new()],
            created_by: Some(created_by),
        }
    }

    #[tokio::test]
    async fn create_keeps_submitted_fields() {
        let (_, store) = InMemoryStore::handle();
        let service = ExerciseService::new(&store);
        let owner = UserId::new();
        let draft = pull_up(owner.clone());

        let exercise = service.create(draft.clone()).await.unwrap();

        assert_eq!(exercise.title, "Pull Up");
        assert_eq!(exercise.content, draft.content);
        assert_eq!(exercise.major_muscle, draft.major_muscle);
        assert_eq!(exercise.minor_muscles, draft.minor_muscles);
        assert_eq!(exercise.created_by, owner);
    }

    #[tokio::test]
    async fn create_requires_title_and_owner() {
        let (_, store) = InMemoryStore::handle();
        let service = ExerciseService::new(&store);

        let no_title = ExerciseDraft {
            title: None,
            ..pull_up(UserId::new())
        };
        assert!(matches!(
            service.create(no_title).await.unwrap_err(),
            AppError::BadRequest(_)
        ));

        let no_owner = ExerciseDraft {
            created_by: None,
            ..pull_up(UserId::new())
        };
        assert!(matches!(
            service.create(no_owner).await.unwrap_err(),
            AppError::BadRequest(_)
        ));
    }

    #[tokio::test]
    async fn get_and_delete_by_title() {
        let (_, store) = InMemoryStore::handle();
        let service = ExerciseService::new(&store);
        service.create(pull_up(UserId::new())).await.unwrap();

        assert_eq!(service.get("Pull Up").await.unwrap().title, "Pull Up");
        assert_eq!(service.delete("Pull Up").await.unwrap(), 1);
        assert!(matches!(
            service.get("Pull Up").await.unwrap_err(),
            AppError::NotFound(msg) if msg == "exercise not found"
        ));
    }
}

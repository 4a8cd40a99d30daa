//! Muscle service

use std::sync::Arc;

use crate::app::listing::Listing;
use crate::app::resolvers::resolve_muscle;
use crate::app::validate::{optional_text, required_text};
use crate::domain::entities::{Muscle, MuscleFilter, NewMuscle};
use crate::domain::ports::{EntityStore, MuscleRepository};
use crate::error::AppError;

#[derive(Debug, Clone, Default)]
pub struct MuscleDraft {
    pub muscle_name: Option<String>,
    pub description: Option<String>,
}

pub struct MuscleService {
    muscles: Arc<dyn MuscleRepository>,
}

impl MuscleService {
    pub fn new(store: &EntityStore) -> Self {
        Self {
            muscles: store.muscles.clone(),
        }
    }

    pub async fn list(&self) -> Result<Listing<Muscle>, AppError> {
        let muscles = self.muscles.find(&MuscleFilter::all()).await?;
        Ok(Listing::from_vec(muscles))
    }

    pub async fn get(&self, name: &str) -> Result<Muscle, AppError> {
        resolve_muscle(self.muscles.as_ref(), name)
            .await?
            .map(|resolution| resolution.into_inner())
            .ok_or_else(|| AppError::NotFound("muscle not found".to_string()))
    }

    pub async fn create(&self, draft: MuscleDraft) -> Result<Muscle, AppError> {
        let new_muscle = NewMuscle {
            muscle_name: required_text(draft.muscle_name, "muscle_name")?,
            description: optional_text(draft.description),
        };

        let muscle = self.muscles.create(&new_muscle).await?;
        tracing::info!(muscle_id = %muscle.id, name = %muscle.muscle_name, "Created muscle");
        Ok(muscle)
    }

    pub async fn delete(&self, name: &str) -> Result<u64, AppError> {
        let removed = self.muscles.remove(&MuscleFilter::by_name(name)).await?;
        tracing::debug!(name, removed, "Deleted muscles");
        Ok(removed)
    }
}

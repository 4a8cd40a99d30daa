//! Exercise domain entity
//!
//! An exercise targets one major muscle and any number of minor muscles.
//! Muscle and user references are opaque ids; nothing checks that they exist.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{MuscleId, UserId};

/// Unique identifier for an exercise
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExerciseId(pub String);

impl ExerciseId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ExerciseId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<String> for ExerciseId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ExerciseId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl AsRef<str> for ExerciseId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ExerciseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Exercise {
    pub id: ExerciseId,
    pub title: String,
    pub content: Option<String>,
    pub major_muscle: Option<MuscleId>,
    /// Order is preserved as submitted
    pub minor_muscles: Vec<MuscleId>,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewExercise {
    pub title: String,
    pub content: Option<String>,
    pub major_muscle: Option<MuscleId>,
    pub minor_muscles: Vec<MuscleId>,
    pub created_by: UserId,
}

#[derive(Debug, Clone, Default)]
pub struct ExerciseFilter {
    pub id: Option<ExerciseId>,
    pub title: Option<String>,
    pub created_by: Option<UserId>,
}

impl ExerciseFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn by_title(title: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            ..Self::default()
        }
    }

    pub fn matches(&self, exercise: &Exercise) -> bool {
        self.id.as_ref().map_or(true, |id| &exercise.id == id)
            && self
                .title
                .as_deref()
                .map_or(true, |title| exercise.title == title)
            && self
                .created_by
                .as_ref()
                .map_or(true, |user| &exercise.created_by == user)
    }
}

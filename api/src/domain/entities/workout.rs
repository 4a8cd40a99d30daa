//! Workout domain entity
//!
//! A named, ordered list of exercises owned by a user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ExerciseId, UserId};

/// Unique identifier for a workout
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkoutId(pub String);

impl WorkoutId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for WorkoutId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<String> for WorkoutId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for WorkoutId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl AsRef<str> for WorkoutId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Workout {
    pub id: WorkoutId,
    pub name: String,
    pub exercises: Vec<ExerciseId>,
    pub private: bool,
    pub created_by: UserId,
    /// Creator's username, copied at creation time
    pub user_name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewWorkout {
    pub name: String,
    pub exercises: Vec<ExerciseId>,
    pub private: bool,
    pub created_by: UserId,
    pub user_name: String,
}

#[derive(Debug, Clone, Default)]
pub struct WorkoutFilter {
    pub id: Option<WorkoutId>,
    pub name: Option<String>,
    pub created_by: Option<UserId>,
}

impl WorkoutFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn by_name(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Self::default()
        }
    }

    pub fn by_creator(user: UserId) -> Self {
        Self {
            created_by: Some(user),
            ..Self::default()
        }
    }

    pub fn matches(&self, workout: &Workout) -> bool {
        self.id.as_ref().map_or(true, |id| &workout.id == id)
            && self
                .name
                .as_deref()
                .map_or(true, |name| workout.name == name)
            && self
                .created_by
                .as_ref()
                .map_or(true, |user| &workout.created_by == user)
    }
}

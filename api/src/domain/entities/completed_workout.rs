//! Completed workout domain entity
//!
//! A record that a workout was completed. `user_id` and `user_name` are copied
//! when the record is written and are never updated afterwards. Deleting the
//! referenced workout leaves the record in place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{UserId, WorkoutId};

/// Unique identifier for a completion record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompletedWorkoutId(pub String);

impl CompletedWorkoutId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CompletedWorkoutId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<String> for CompletedWorkoutId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for CompletedWorkoutId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl AsRef<str> for CompletedWorkoutId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CompletedWorkoutId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletedWorkout {
    pub id: CompletedWorkoutId,
    pub workout: WorkoutId,
    pub user_id: UserId,
    pub user_name: String,
    pub completed_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewCompletedWorkout {
    pub workout: WorkoutId,
    pub user_id: UserId,
    pub user_name: String,
}

#[derive(Debug, Clone, Default)]
pub struct CompletedWorkoutFilter {
    pub workout: Option<WorkoutId>,
    pub user_name: Option<String>,
}

impl CompletedWorkoutFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn by_user_name(user_name: &str) -> Self {
        Self {
            user_name: Some(user_name.to_string()),
            ..Self::default()
        }
    }

    pub fn matches(&self, completed: &CompletedWorkout) -> bool {
        self.workout.as_ref().map_or(true, |w| &completed.workout == w)
            && self
                .user_name
                .as_deref()
                .map_or(true, |name| completed.user_name == name)
    }
}

//! Muscle domain entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a muscle
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MuscleId(pub String);

impl MuscleId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for MuscleId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<String> for MuscleId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for MuscleId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl AsRef<str> for MuscleId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MuscleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A muscle that exercises can target
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Muscle {
    pub id: MuscleId,
    pub muscle_name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewMuscle {
    pub muscle_name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct MuscleFilter {
    pub id: Option<MuscleId>,
    pub muscle_name: Option<String>,
}

impl MuscleFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn by_name(name: &str) -> Self {
        Self {
            muscle_name: Some(name.to_string()),
            ..Self::default()
        }
    }

    pub fn matches(&self, muscle: &Muscle) -> bool {
        self.id.as_ref().map_or(true, |id| &muscle.id == id)
            && self
                .muscle_name
                .as_deref()
                .map_or(true, |name| muscle.muscle_name == name)
    }
}

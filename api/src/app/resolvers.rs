//! Lookup resolvers
//!
//! Translate a human key (username, workout name, exercise title, muscle name)
//! into a stored document. Human keys are not unique in the store: when several
//! documents match, the first one in scan order wins and the outcome says so.

use crate::domain::entities::{
    Exercise, ExerciseFilter, Muscle, MuscleFilter, User, UserFilter, Workout, WorkoutFilter,
};
use crate::domain::ports::{
    ExerciseRepository, MuscleRepository, UserRepository, WorkoutRepository,
};
use crate::error::DomainError;

/// Outcome of a successful lookup
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<T> {
    Unique(T),
    /// `matches` counts every document sharing the key, including `first`
    FirstOfMany { first: T, matches: usize },
}

impl<T> Resolution<T> {
    /// `None` when there are no matches
    pub fn from_matches(matches: Vec<T>) -> Option<Self> {
        let count = matches.len();
        let first = matches.into_iter().next()?;
        Some(if count == 1 {
            Resolution::Unique(first)
        } else {
            Resolution::FirstOfMany {
                first,
                matches: count,
            }
        })
    }

    pub fn is_unique(&self) -> bool {
        matches!(self, Resolution::Unique(_))
    }

    pub fn into_inner(self) -> T {
        match self {
            Resolution::Unique(doc) | Resolution::FirstOfMany { first: doc, .. } => doc,
        }
    }
}

fn resolved<T>(kind: &str, key: &str, matches: Vec<T>) -> Option<Resolution<T>> {
    let count = matches.len();
    let resolution = Resolution::from_matches(matches)?;
    if !resolution.is_unique() {
        tracing::warn!(kind, key, matches = count, "Human key is shared, using first match");
    }
    Some(resolution)
}

pub async fn resolve_user(
    users: &dyn UserRepository,
    username: &str,
) -> Result<Option<Resolution<User>>, DomainError> {
    let matches = users.find(&UserFilter::by_username(username)).await?;
    Ok(resolved("user", username, matches))
}

pub async fn resolve_muscle(
    muscles: &dyn MuscleRepository,
    name: &str,
) -> Result<Option<Resolution<Muscle>>, DomainError> {
    let matches = muscles.find(&MuscleFilter::by_name(name)).await?;
    Ok(resolved("muscle", name, matches))
}

pub async fn resolve_exercise(
    exercises: &dyn ExerciseRepository,
    title: &str,
) -> Result<Option<Resolution<Exercise>>, DomainError> {
    let matches = exercises.find(&ExerciseFilter::by_title(title)).await?;
    Ok(resolved("exercise", title, matches))
}

pub async fn resolve_workout(
    workouts: &dyn WorkoutRepository,
    name: &str,
) -> Result<Option<Resolution<Workout>>, DomainError> {
    let matches = workouts.find(&WorkoutFilter::by_name(name)).await?;
    Ok(resolved("workout", name, matches))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::NewWorkout;
    use crate::test_utils::{new_workout_named, InMemoryStore};

    #[test]
    fn from_matches_tags_outcome() {
        assert_eq!(Resolution::<i32>::from_matches(vec![]), None);
        assert_eq!(Resolution::from_matches(vec![7]), Some(Resolution::Unique(7)));
        assert_eq!(
            Resolution::from_matches(vec![7, 8, 9]),
            Some(Resolution::FirstOfMany {
                first: 7,
                matches: 3
            })
        );
    }

    #[tokio::test]
    async fn resolve_missing_workout() {
        let store = InMemoryStore::new();
        let result = resolve_workout(&store, "nope").await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn resolve_duplicate_workout_name_takes_first_created() {
        let store = InMemoryStore::new();
        let first = WorkoutRepository::create(&store, &new_workout_named("new"))
            .await
            .unwrap();
        let second = NewWorkout {
            private: true,
            ..new_workout_named("new")
        };
        WorkoutRepository::create(&store, &second).await.unwrap();

        let resolution = resolve_workout(&store, "new").await.unwrap().unwrap();

        assert!(!resolution.is_unique());
        assert!(matches!(resolution, Resolution::FirstOfMany { matches: 2, .. }));
        assert_eq!(resolution.into_inner().id, first.id);
    }
}

//! In-memory implementations of the repository ports
//!
//! `InMemoryStore` keeps each collection as a `Vec` in insertion order, so
//! `find` returns documents in the order they were created and duplicate
//! human keys are kept. `FailingStore` fails every call with a database error.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{
    CompletedWorkout, CompletedWorkoutFilter, CompletedWorkoutId, Exercise, ExerciseFilter,
    ExerciseId, Muscle, MuscleFilter, MuscleId, NewCompletedWorkout, NewExercise, NewMuscle,
    NewUser, NewWorkout, User, UserFilter, UserId, Workout, WorkoutFilter, WorkoutId,
};
use crate::domain::ports::{
    CompletedWorkoutRepository, EntityStore, ExerciseRepository, MuscleRepository,
    UserRepository, WorkoutRepository,
};
use crate::error::DomainError;

// ============================================================================
// In-Memory Entity Store
// ============================================================================

#[derive(Default)]
pub struct InMemoryStore {
    users: RwLock<Vec<User>>,
    muscles: RwLock<Vec<Muscle>>,
    exercises: RwLock<Vec<Exercise>>,
    workouts: RwLock<Vec<Workout>>,
    completed_workouts: RwLock<Vec<CompletedWorkout>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The store plus an `EntityStore` handle backed by it
    pub fn handle() -> (Arc<Self>, EntityStore) {
        let memory = Arc::new(Self::new());
        let store = EntityStore::shared(memory.clone());
        (memory, store)
    }

    pub fn insert_user(&self, new: NewUser) -> User {
        let user = User {
            id: UserId::new(),
            username: new.username,
            name: new.name,
            created_at: Utc::now(),
        };
        self.users.write().unwrap().push(user.clone());
        user
    }

    pub fn insert_muscle(&self, new: NewMuscle) -> Muscle {
        let muscle = Muscle {
            id: MuscleId::new(),
            muscle_name: new.muscle_name,
            description: new.description,
            created_at: Utc::now(),
        };
        self.muscles.write().unwrap().push(muscle.clone());
        muscle
    }

    pub fn insert_exercise(&self, new: NewExercise) -> Exercise {
        let exercise = Exercise {
            id: ExerciseId::new(),
            title: new.title,
            content: new.content,
            major_muscle: new.major_muscle,
            minor_muscles: new.minor_muscles,
            created_by: new.created_by,
            created_at: Utc::now(),
        };
        self.exercises.write().unwrap().push(exercise.clone());
        exercise
    }

    pub fn insert_workout(&self, new: NewWorkout) -> Workout {
        let workout = Workout {
            id: WorkoutId::new(),
            name: new.name,
            exercises: new.exercises,
            private: new.private,
            created_by: new.created_by,
            user_name: new.user_name,
            created_at: Utc::now(),
        };
        self.workouts.write().unwrap().push(workout.clone());
        workout
    }

    pub fn insert_completed_workout(&self, new: NewCompletedWorkout) -> CompletedWorkout {
        let completed = CompletedWorkout {
            id: CompletedWorkoutId::new(),
            workout: new.workout,
            user_id: new.user_id,
            user_name: new.user_name,
            completed_at: Utc::now(),
        };
        self.completed_workouts
            .write()
            .unwrap()
            .push(completed.clone());
        completed
    }

    pub fn workouts(&self) -> Vec<Workout> {
        self.workouts.read().unwrap().clone()
    }

    pub fn completed_workouts(&self) -> Vec<CompletedWorkout> {
        self.completed_workouts.read().unwrap().clone()
    }
}

fn remove_matching<T>(docs: &RwLock<Vec<T>>, matches: impl Fn(&T) -> bool) -> u64 {
    let mut docs = docs.write().unwrap();
    let before = docs.len();
    docs.retain(|doc| !matches(doc));
    (before - docs.len()) as u64
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find(&self, filter: &UserFilter) -> Result<Vec<User>, DomainError> {
        let users = self.users.read().unwrap();
        Ok(users.iter().filter(|u| filter.matches(u)).cloned().collect())
    }

    async fn create(&self, user: &NewUser) -> Result<User, DomainError> {
        Ok(self.insert_user(user.clone()))
    }

    async fn remove(&self, filter: &UserFilter) -> Result<u64, DomainError> {
        Ok(remove_matching(&self.users, |u| filter.matches(u)))
    }
}

#[async_trait]
impl MuscleRepository for InMemoryStore {
    async fn find(&self, filter: &MuscleFilter) -> Result<Vec<Muscle>, DomainError> {
        let muscles = self.muscles.read().unwrap();
        Ok(muscles.iter().filter(|m| filter.matches(m)).cloned().collect())
    }

    async fn create(&self, muscle: &NewMuscle) -> Result<Muscle, DomainError> {
        Ok(self.insert_muscle(muscle.clone()))
    }

    async fn remove(&self, filter: &MuscleFilter) -> Result<u64, DomainError> {
        Ok(remove_matching(&self.muscles, |m| filter.matches(m)))
    }
}

#[async_trait]
impl ExerciseRepository for InMemoryStore {
    async fn find(&self, filter: &ExerciseFilter) -> Result<Vec<Exercise>, DomainError> {
        let exercises = self.exercises.read().unwrap();
        Ok(exercises
            .iter()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect())
    }

    async fn create(&self, exercise: &NewExercise) -> Result<Exercise, DomainError> {
        Ok(self.insert_exercise(exercise.clone()))
    }

    async fn remove(&self, filter: &ExerciseFilter) -> Result<u64, DomainError> {
        Ok(remove_matching(&self.exercises, |e| filter.matches(e)))
    }
}

#[async_trait]
impl WorkoutRepository for InMemoryStore {
    async fn find(&self, filter: &WorkoutFilter) -> Result<Vec<Workout>, DomainError> {
        let workouts = self.workouts.read().unwrap();
        Ok(workouts
            .iter()
            .filter(|w| filter.matches(w))
            .cloned()
            .collect())
    }

    async fn create(&self, workout: &NewWorkout) -> Result<Workout, DomainError> {
        Ok(self.insert_workout(workout.clone()))
    }

    async fn remove(&self, filter: &WorkoutFilter) -> Result<u64, DomainError> {
        Ok(remove_matching(&self.workouts, |w| filter.matches(w)))
    }
}

#[async_trait]
impl CompletedWorkoutRepository for InMemoryStore {
    async fn find(
        &self,
        filter: &CompletedWorkoutFilter,
    ) -> Result<Vec<CompletedWorkout>, DomainError> {
        let completed = self.completed_workouts.read().unwrap();
        Ok(completed
            .iter()
            .filter(|c| filter.matches(c))
            .cloned()
            .collect())
    }

    async fn create(
        &self,
        completed: &NewCompletedWorkout,
    ) -> Result<CompletedWorkout, DomainError> {
        Ok(self.insert_completed_workout(completed.clone()))
    }

    async fn remove(&self, filter: &CompletedWorkoutFilter) -> Result<u64, DomainError> {
        Ok(remove_matching(&self.completed_workouts, |c| {
            filter.matches(c)
        }))
    }
}

// ============================================================================
// Failing Entity Store
// ============================================================================

/// Every operation fails as if the database were unreachable
#[derive(Default)]
pub struct FailingStore;

impl FailingStore {
    pub fn handle() -> EntityStore {
        EntityStore::shared(Arc::new(FailingStore))
    }
}

fn unreachable_db<T>() -> Result<T, DomainError> {
    Err(DomainError::Database(
        "connection refused (os error 111)".to_string(),
    ))
}

#[async_trait]
impl UserRepository for FailingStore {
    async fn find(&self, _filter: &UserFilter) -> Result<Vec<User>, DomainError> {
        unreachable_db()
    }

    async fn create(&self, _user: &NewUser) -> Result<User, DomainError> {
        unreachable_db()
    }

    async fn remove(&self, _filter: &UserFilter) -> Result<u64, DomainError> {
        unreachable_db()
    }
}

#[async_trait]
impl MuscleRepository for FailingStore {
    async fn find(&self, _filter: &MuscleFilter) -> Result<Vec<Muscle>, DomainError> {
        unreachable_db()
    }

    async fn create(&self, _muscle: &NewMuscle) -> Result<Muscle, DomainError> {
        unreachable_db()
    }

    async fn remove(&self, _filter: &MuscleFilter) -> Result<u64, DomainError> {
        unreachable_db()
    }
}

#[async_trait]
impl ExerciseRepository for FailingStore {
    async fn find(&self, _filter: &ExerciseFilter) -> Result<Vec<Exercise>, DomainError> {
        unreachable_db()
    }

    async fn create(&self, _exercise: &NewExercise) -> Result<Exercise, DomainError> {
        unreachable_db()
    }

    async fn remove(&self, _filter: &ExerciseFilter) -> Result<u64, DomainError> {
        unreachable_db()
    }
}

#[async_trait]
impl WorkoutRepository for FailingStore {
    async fn find(&self, _filter: &WorkoutFilter) -> Result<Vec<Workout>, DomainError> {
        unreachable_db()
    }

    async fn create(&self, _workout: &NewWorkout) -> Result<Workout, DomainError> {
        unreachable_db()
    }

    async fn remove(&self, _filter: &WorkoutFilter) -> Result<u64, DomainError> {
        unreachable_db()
    }
}

#[async_trait]
impl CompletedWorkoutRepository for FailingStore {
    async fn find(
        &self,
        _filter: &CompletedWorkoutFilter,
    ) -> Result<Vec<CompletedWorkout>, DomainError> {
        unreachable_db()
    }

    async fn create(
        &self,
        _completed: &NewCompletedWorkout,
    ) -> Result<CompletedWorkout, DomainError> {
        unreachable_db()
    }

    async fn remove(&self, _filter: &CompletedWorkoutFilter) -> Result<u64, DomainError> {
        unreachable_db()
    }
}

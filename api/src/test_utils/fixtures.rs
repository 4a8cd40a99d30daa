//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::entities::{
    MuscleId, NewExercise, NewMuscle, NewUser, NewWorkout, User, UserId,
};

pub fn new_user(username: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        name: Some(format!("{} (test)", username)),
    }
}

pub fn new_muscle(name: &str) -> NewMuscle {
    NewMuscle {
        muscle_name: name.to_string(),
        description: Some(format!("The {} muscle group", name)),
    }
}

pub fn new_exercise(title: &str, created_by: UserId) -> NewExercise {
    NewExercise {
        title: title.to_string(),
        content: Some(format!("How to do a {}", title)),
        major_muscle: Some(MuscleId::new()),
        minor_muscles: vec![MuscleId::new()],
        created_by,
    }
}

/// A workout owned by `user`, with `user_name` copied from it
pub fn new_workout_for(name: &str, user: &User) -> NewWorkout {
    NewWorkout {
        name: name.to_string(),
        exercises: vec![],
        private: false,
        created_by: user.id.clone(),
        user_name: user.username.clone(),
    }
}

/// A workout owned by a user that is not in the store
pub fn new_workout_named(name: &str) -> NewWorkout {
    NewWorkout {
        name: name.to_string(),
        exercises: vec![],
        private: false,
        created_by: UserId::new(),
        user_name: "alice".to_string(),
    }
}

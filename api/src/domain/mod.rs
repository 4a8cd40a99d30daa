//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Domain models for users, muscles, exercises, workouts and completions
//! - `ports`: Trait definitions for the entity store
//!
//! Use cases that compose the ports live in `crate::app`.

pub mod entities;
pub mod ports;

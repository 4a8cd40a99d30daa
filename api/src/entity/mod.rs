//! SeaORM entities
//!
//! Table models for the PostgreSQL adapters. Ids and references are TEXT;
//! reference sequences (`exercises`, `minor_muscles`) are JSONB arrays of
//! strings. `seq` is a BIGSERIAL that orders rows by insertion.

pub mod completed_workouts;
pub mod exercises;
pub mod muscles;
pub mod users;
pub mod workouts;

//! Table bootstrap
//!
//! Idempotent DDL run at startup. No foreign keys: references between
//! collections are plain text ids, and removing a document never cascades.
//! `seq` gives every row a strict insertion order, independent of clock
//! resolution.

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr};

const STATEMENTS: &[&str] = &[
    r#"CREATE TABLE IF NOT EXISTS users (
        id TEXT PRIMARY KEY,
        seq BIGSERIAL NOT NULL,
        username TEXT NOT NULL,
        name TEXT,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )"#,
    "CREATE INDEX IF NOT EXISTS users_username_idx ON users (username)",
    r#"CREATE TABLE IF NOT EXISTS muscles (
        id TEXT PRIMARY KEY,
        seq BIGSERIAL NOT NULL,
        muscle_name TEXT NOT NULL,
        description TEXT,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )"#,
    "CREATE INDEX IF NOT EXISTS muscles_name_idx ON muscles (muscle_name)",
    r#"CREATE TABLE IF NOT EXISTS exercises (
        id TEXT PRIMARY KEY,
        seq BIGSERIAL NOT NULL,
        title TEXT NOT NULL,
        content TEXT,
        major_muscle TEXT,
        minor_muscles JSONB NOT NULL DEFAULT '[]'::jsonb,
        created_by TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )"#,
    "CREATE INDEX IF NOT EXISTS exercises_title_idx ON exercises (title)",
    r#"CREATE TABLE IF NOT EXISTS workouts (
        id TEXT PRIMARY KEY,
        seq BIGSERIAL NOT NULL,
        name TEXT NOT NULL,
        exercises JSONB NOT NULL DEFAULT '[]'::jsonb,
        private BOOLEAN NOT NULL DEFAULT false,
        created_by TEXT NOT NULL,
        user_name TEXT NOT NULL DEFAULT '',
        created_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )"#,
    "CREATE INDEX IF NOT EXISTS workouts_name_idx ON workouts (name)",
    "CREATE INDEX IF NOT EXISTS workouts_created_by_idx ON workouts (created_by)",
    r#"CREATE TABLE IF NOT EXISTS completed_workouts (
        id TEXT PRIMARY KEY,
        seq BIGSERIAL NOT NULL,
        workout_id TEXT NOT NULL,
        user_id TEXT NOT NULL,
        user_name TEXT NOT NULL,
        completed_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )"#,
    "CREATE INDEX IF NOT EXISTS completed_workouts_user_name_idx ON completed_workouts (user_name)",
];

pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    for statement in STATEMENTS {
        db.execute_unprepared(statement).await?;
    }
    tracing::debug!(statements = STATEMENTS.len(), "Schema is up to date");
    Ok(())
}

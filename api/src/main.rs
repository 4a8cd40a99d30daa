//! Workout API Server
//!
//! A REST backend for tracking workouts: users build workouts out of exercises,
//! exercises target muscles, and users record the workouts they complete.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use sea_orm::Database;
use serde::Serialize;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use app::{
    CompletionAttribution, CompletionRecorder, ExerciseService, MuscleService, UserService,
    WorkoutService,
};
use config::Config;
use domain::ports::EntityStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub muscle_service: Arc<MuscleService>,
    pub exercise_service: Arc<ExerciseService>,
    pub workout_service: Arc<WorkoutService>,
    pub completion_recorder: Arc<CompletionRecorder>,
}

impl AppState {
    pub fn new(store: &EntityStore, attribution: CompletionAttribution) -> Self {
        Self {
            user_service: Arc::new(UserService::new(store)),
            muscle_service: Arc::new(MuscleService::new(store)),
            exercise_service: Arc::new(ExerciseService::new(store)),
            workout_service: Arc::new(WorkoutService::new(store)),
            completion_recorder: Arc::new(CompletionRecorder::new(store, attribution)),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub fn build_router(state: AppState) -> Router {
    // Unsupported methods on a known path get the same 404 as unknown paths
    let not_found = handlers::page_not_found;

    Router::new()
        // Health check
        .route("/health", get(health).fallback(not_found))
        // Users
        .route(
            "/users",
            get(handlers::list_users)
                .post(handlers::create_user)
                .fallback(not_found),
        )
        .route(
            "/users/:username",
            get(handlers::get_user)
                .delete(handlers::delete_user)
                .fallback(not_found),
        )
        .route(
            "/users/:username/workouts",
            get(handlers::list_user_workouts).fallback(not_found),
        )
        .route(
            "/users/:username/completed_workouts",
            get(handlers::list_user_completed_workouts).fallback(not_found),
        )
        // Workouts (POST on a single workout records a completion)
        .route(
            "/workouts",
            get(handlers::list_workouts)
                .post(handlers::create_workout)
                .fallback(not_found),
        )
        .route(
            "/workouts/:name",
            get(handlers::get_workout)
                .post(handlers::record_completion)
                .delete(handlers::delete_workout)
                .fallback(not_found),
        )
        // Exercises
        .route(
            "/exercises",
            get(handlers::list_exercises)
                .post(handlers::create_exercise)
                .fallback(not_found),
        )
        .route(
            "/exercises/:title",
            get(handlers::get_exercise)
                .delete(handlers::delete_exercise)
                .fallback(not_found),
        )
        // Muscles
        .route(
            "/muscles",
            get(handlers::list_muscles)
                .post(handlers::create_muscle)
                .fallback(not_found),
        )
        .route(
            "/muscles/:name",
            get(handlers::get_muscle)
                .delete(handlers::delete_muscle)
                .fallback(not_found),
        )
        .fallback(not_found)
        // Middleware
        .layer(CatchPanicLayer::custom(handlers::handle_panic))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,workout_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting workout API...");

    // Load configuration
    let config = Config::from_env()?;

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    adapters::ensure_schema(&db)
        .await
        .context("Failed to create database schema")?;
    tracing::info!("Database connected");

    let store = EntityStore::postgres(db);
    let state = AppState::new(&store, config.completion_attribution);
    tracing::info!(
        attribution = %state.completion_recorder.attribution(),
        "Completion attribution configured"
    );

    let app = build_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

// SPDX-License-Identifier: MIT

//! Gym App API Server
//!
//! Registers users, stores profile data, and manages weekly workout plans
//! backed by Firestore.

use gymapp_api::{
    config::Config,
    db::FirestoreDb,
    services::{ExerciseService, UserService, WorkoutPlanService},
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting Gym App API");

    // Initialize Firestore database
    let db = FirestoreDb::new(&config.gcp_project_id)
        .await
        .expect("Failed to connect to Firestore");

    // Build shared state; each service gets its own handle to the store
    let state = Arc::new(AppState {
        config: config.clone(),
        user_service: UserService::new(db.clone()),
        exercise_service: ExerciseService::new(db.clone()),
        workout_plan_service: WorkoutPlanService::new(db.clone()),
        db,
    });

    // Build router
    let app = gymapp_api::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("gymapp_api=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}

// SPDX-License-Identifier: MIT

use gymapp_api::config::Config;
use gymapp_api::db::FirestoreDb;
use gymapp_api::routes::create_router;
use gymapp_api::services::{ExerciseService, UserService, WorkoutPlanService};
use gymapp_api::AppState;
use std::sync::Arc;

/// Check if emulator is available via environment variable.
#[allow(dead_code)]
pub fn emulator_available() -> bool {
    std::env::var("FIRESTORE_EMULATOR_HOST").is_ok()
}

/// Skip test with message if emulator not available.
#[macro_export]
macro_rules! require_emulator {
    () => {
        if !crate::common::emulator_available() {
            eprintln!("⚠️  Skipping: FIRESTORE_EMULATOR_HOST not set");
            return;
        }
    };
}

/// Create a test database connection.
#[allow(dead_code)]
pub async fn test_db() -> FirestoreDb {
    FirestoreDb::new("test-project")
        .await
        .expect("Failed to connect to Firestore emulator")
}

/// Create a mock database connection (offline).
#[allow(dead_code)]
pub fn test_db_offline() -> FirestoreDb {
    FirestoreDb::new_mock()
}

#[allow(dead_code)]
fn build_app(db: FirestoreDb) -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState {
        config: Config::test_default(),
        user_service: UserService::new(db.clone()),
        exercise_service: ExerciseService::new(db.clone()),
        workout_plan_service: WorkoutPlanService::new(db.clone()),
        db,
    });

    (create_router(state.clone()), state)
}

/// Create a test app with an offline mock database.
///
/// Good for exercising validation paths that must reject before any
/// store access; store-touching paths will return 500.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    build_app(test_db_offline())
}

/// Create a test app backed by the Firestore emulator.
#[allow(dead_code)]
pub async fn create_emulator_app() -> (axum::Router, Arc<AppState>) {
    build_app(test_db().await)
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("Failed to read response body");
    serde_json::from_slice(&bytes).expect("Response body is not JSON")
}

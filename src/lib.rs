// SPDX-License-Identifier: MIT

//! Gym App backend: REST API for user accounts, the exercise catalog,
//! and weekly workout plans, backed by Firestore.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use db::FirestoreDb;
use services::{ExerciseService, UserService, WorkoutPlanService};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: FirestoreDb,
    pub user_service: UserService,
    pub exercise_service: ExerciseService,
    pub workout_plan_service: WorkoutPlanService,
}

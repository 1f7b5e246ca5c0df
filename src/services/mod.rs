// SPDX-License-Identifier: MIT

//! Services module - business logic layer.
//!
//! Each service holds its own handle to the database; failures are
//! converted to `AppError` at the service boundary.

pub mod exercise;
pub mod user;
pub mod workout_plan;

pub use exercise::ExerciseService;
pub use user::{RegisterRequest, UserService};
pub use workout_plan::{CreatePlanRequest, UpdatePlanRequest, WorkoutPlanService};

// SPDX-License-Identifier: MIT

//! Workout routes: exercise catalog and workout plan CRUD.
//!
//! Plan and exercise endpoints return bare documents/arrays rather than
//! the user-endpoint envelope; the client consumes them directly.

use crate::error::{AppError, Result};
use crate::models::{Exercise, WorkoutPlan};
use crate::services::{CreatePlanRequest, UpdatePlanRequest};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Workout routes, mounted under `/api/workout`.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/getAllExercises", get(get_all_exercises))
        .route("/CreateWorkoutPlan", post(create_workout_plan))
        .route("/GetWorkoutPlans", get(get_workout_plans))
        .route("/GetWorkoutPlanById", get(get_workout_plan_by_id))
        .route("/UpdateWorkoutPlan/{id}", put(update_workout_plan))
        .route("/DeleteWorkoutPlan/{id}", delete(delete_workout_plan))
}

// ─── Exercise Catalog ────────────────────────────────────────

/// List the entire exercise catalog.
async fn get_all_exercises(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Exercise>>> {
    let exercises = state.exercise_service.list().await?;
    Ok(Json(exercises))
}

// ─── Workout Plans ───────────────────────────────────────────

/// Create a workout plan from the full nested structure.
async fn create_workout_plan(
    State(state): State<Arc<AppState>>,
    WithRejection(Json(payload), _): WithRejection<Json<CreatePlanRequest>, AppError>,
) -> Result<(StatusCode, Json<WorkoutPlan>)> {
    let plan = state.workout_plan_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(plan)))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlansQuery {
    user_id: Option<String>,
}

/// List all plans belonging to a user.
async fn get_workout_plans(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PlansQuery>,
) -> Result<Json<Vec<WorkoutPlan>>> {
    // Reject before touching the store.
    let user_id = params
        .user_id
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| AppError::Validation("User ID is required".to_string()))?;

    let plans = state.workout_plan_service.list(&user_id).await?;
    Ok(Json(plans))
}

#[derive(Deserialize)]
struct PlanByIdQuery {
    id: Option<String>,
}

/// Fetch a single plan by id.
async fn get_workout_plan_by_id(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PlanByIdQuery>,
) -> Result<Json<WorkoutPlan>> {
    let id = params
        .id
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| AppError::Validation("Plan ID is required".to_string()))?;

    let plan = state.workout_plan_service.get(&id).await?;
    Ok(Json(plan))
}

/// Merge the provided fields into an existing plan.
async fn update_workout_plan(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    WithRejection(Json(payload), _): WithRejection<Json<UpdatePlanRequest>, AppError>,
) -> Result<Json<WorkoutPlan>> {
    let plan = state.workout_plan_service.update(&id, payload).await?;
    Ok(Json(plan))
}

#[derive(Serialize)]
struct DeletePlanResponse {
    message: String,
}

/// Delete a plan; returns a confirmation message, not the document.
async fn delete_workout_plan(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<DeletePlanResponse>> {
    state.workout_plan_service.delete(&id).await?;

    Ok(Json(DeletePlanResponse {
        message: "Workout plan deleted successfully".to_string(),
    }))
}

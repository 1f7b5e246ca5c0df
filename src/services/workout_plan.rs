// SPDX-License-Identifier: MIT

//! Workout plan CRUD.
//!
//! Plans are created and updated wholesale: create takes the entire
//! nested structure, update merges the named top-level fields into the
//! stored document. There is no field-level patching below the top level.
//!
//! `userId` and `exerciseId` values are advisory references; their
//! existence is deliberately not checked here.

use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::db::FirestoreDb;
use crate::error::{AppError, Result};
use crate::models::{Difficulty, PlanStats, WeeklySchedule, WorkoutPlan};

/// Plan creation payload: the full nested structure.
///
/// `difficulty` and `estimatedDuration` are required; everything else
/// falls back to schema defaults.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlanRequest {
    pub user_id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[validate(nested)]
    #[serde(default)]
    pub weekly_schedule: WeeklySchedule,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub is_template: Option<bool>,
    pub difficulty: Difficulty,
    pub estimated_duration: u32,
    #[serde(default)]
    pub stats: Option<PlanStats>,
}

/// Partial update payload; only the provided top-level fields change.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlanRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[validate(nested)]
    #[serde(default)]
    pub weekly_schedule: Option<WeeklySchedule>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub is_template: Option<bool>,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub estimated_duration: Option<u32>,
    #[serde(default)]
    pub stats: Option<PlanStats>,
}

/// Service for workout plan CRUD.
#[derive(Clone)]
pub struct WorkoutPlanService {
    db: FirestoreDb,
}

impl WorkoutPlanService {
    pub fn new(db: FirestoreDb) -> Self {
        Self { db }
    }

    /// Persist a new plan with schema defaults for omitted fields.
    pub async fn create(&self, req: CreatePlanRequest) -> Result<WorkoutPlan> {
        req.validate()?;

        let now = Utc::now();
        let plan = WorkoutPlan {
            id: Uuid::new_v4().to_string(),
            user_id: req.user_id,
            name: req.name,
            description: req.description,
            weekly_schedule: req.weekly_schedule,
            is_active: req.is_active.unwrap_or(true),
            is_template: req.is_template.unwrap_or(false),
            difficulty: req.difficulty,
            estimated_duration: req.estimated_duration,
            stats: req.stats.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };

        self.db.set_plan(&plan).await?;
        tracing::info!(plan_id = %plan.id, user_id = %plan.user_id, "Workout plan created");

        Ok(plan)
    }

    /// All plans for a user, active or not, templates included.
    pub async fn list(&self, user_id: &str) -> Result<Vec<WorkoutPlan>> {
        let plans = self.db.get_plans_for_user(user_id).await?;
        tracing::debug!(user_id, count = plans.len(), "Fetched workout plans");
        Ok(plans)
    }

    /// Fetch a single plan by document ID.
    pub async fn get(&self, id: &str) -> Result<WorkoutPlan> {
        self.db
            .get_plan(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Workout plan".to_string()))
    }

    /// Merge the provided fields into an existing plan and return the
    /// post-update document. Never creates a plan for an unknown id.
    pub async fn update(&self, id: &str, req: UpdatePlanRequest) -> Result<WorkoutPlan> {
        req.validate()?;

        let mut plan = self
            .db
            .get_plan(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Workout plan".to_string()))?;

        if let Some(name) = req.name {
            plan.name = name;
        }
        if let Some(description) = req.description {
            plan.description = Some(description);
        }
        if let Some(weekly_schedule) = req.weekly_schedule {
            plan.weekly_schedule = weekly_schedule;
        }
        if let Some(is_active) = req.is_active {
            plan.is_active = is_active;
        }
        if let Some(is_template) = req.is_template {
            plan.is_template = is_template;
        }
        if let Some(difficulty) = req.difficulty {
            plan.difficulty = difficulty;
        }
        if let Some(estimated_duration) = req.estimated_duration {
            plan.estimated_duration = estimated_duration;
        }
        if let Some(stats) = req.stats {
            plan.stats = stats;
        }
        plan.updated_at = Utc::now();

        self.db.set_plan(&plan).await?;
        tracing::info!(plan_id = %plan.id, "Workout plan updated");

        Ok(plan)
    }

    /// Delete a plan by document ID. Returns 404 semantics when absent.
    pub async fn delete(&self, id: &str) -> Result<()> {
        if self.db.get_plan(id).await?.is_none() {
            return Err(AppError::NotFound("Workout plan".to_string()));
        }

        self.db.delete_plan(id).await?;
        tracing::info!(plan_id = id, "Workout plan deleted");
        Ok(())
    }
}

// SPDX-License-Identifier: MIT

//! Workout plan model: a weekly schedule of planned exercises.
//!
//! A plan is created and updated as one nested document. The weekly
//! schedule maps each of the seven weekdays to an optional day plan;
//! absent days stay absent on the wire so a plan round-trips unchanged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Workout plan document stored in Firestore.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlan {
    /// Document ID
    pub id: String,
    /// Owning user (advisory reference; existence is not checked)
    pub user_id: String,

    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub weekly_schedule: WeeklySchedule,

    pub is_active: bool,
    /// Marks a plan as reusable by other users
    pub is_template: bool,
    pub difficulty: Difficulty,
    /// Minutes per session
    pub estimated_duration: u32,

    pub stats: PlanStats,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// Usage stats for a plan, zeroed at creation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanStats {
    #[serde(default)]
    pub total_sessions: u32,
    #[serde(default)]
    pub completed_sessions: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_used: Option<DateTime<Utc>>,
    /// Template plan this one was created from, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_from: Option<String>,
}

/// The seven weekdays are the only valid keys; each maps to an optional
/// day plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct WeeklySchedule {
    #[validate(nested)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monday: Option<DayPlan>,
    #[validate(nested)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tuesday: Option<DayPlan>,
    #[validate(nested)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wednesday: Option<DayPlan>,
    #[validate(nested)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thursday: Option<DayPlan>,
    #[validate(nested)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friday: Option<DayPlan>,
    #[validate(nested)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saturday: Option<DayPlan>,
    #[validate(nested)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sunday: Option<DayPlan>,
}

/// One weekday's exercise slate or rest designation.
///
/// Everything defaults, so `{ "isRestDay": true }` is a valid day plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    /// e.g. "Push Day", "Back & Biceps", "Leg Day"
    #[serde(default)]
    pub name: String,
    #[validate(nested)]
    #[serde(default)]
    pub muscle_groups: Vec<MuscleGroupFocus>,
    #[validate(nested)]
    #[serde(default)]
    pub exercises: Vec<PlannedExercise>,
    /// Minutes
    #[serde(default)]
    pub estimated_duration: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub is_rest_day: bool,
}

/// Muscle group targeted by a day, with UI hints.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MuscleGroupFocus {
    /// e.g. "chest", "back", "legs"
    pub name: String,
    /// Primary or secondary focus
    #[serde(default)]
    pub primary: bool,
    /// Display color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// An exercise instance scheduled within a day plan.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PlannedExercise {
    /// Reference to the exercise catalog (advisory, not checked)
    pub exercise_id: String,
    /// Denormalized from the catalog at plan-creation time
    pub exercise_name: String,
    pub muscle_group: String,

    #[validate(nested)]
    #[serde(default)]
    pub sets: Vec<PlannedSet>,

    /// Execution order within the day. Should be unique per day;
    /// contiguity is not required and uniqueness is not enforced.
    pub order: u32,

    /// Seconds of rest between sets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest_time: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_superset: Option<bool>,
    /// Exercises sharing a group index are performed back-to-back
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub superset_group: Option<u32>,
}

/// One prescribed work unit. Any subset of targets may be given; absent
/// targets stay absent rather than defaulting to zero.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PlannedSet {
    #[serde(rename = "type")]
    pub set_type: SetType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_reps: Option<u32>,
    #[validate(nested)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rep_range: Option<RepRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_weight: Option<f64>,
    /// Rate of Perceived Exertion, 1-10
    #[validate(range(min = 1.0, max = 10.0))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_rpe: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SetType {
    Normal,
    Warmup,
    Dropset,
    Failure,
    Amrap,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RepRange {
    pub min: u32,
    pub max: u32,
}

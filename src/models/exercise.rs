// SPDX-License-Identifier: MIT

//! Exercise catalog model.
//!
//! Catalog entries are pre-seeded and read-only from the service's
//! perspective; planned exercises denormalize name and muscle group from
//! here at plan-creation time instead of joining live.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Exercise catalog document stored in Firestore.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    /// Document ID
    pub id: String,
    /// e.g. "Bench Press", "Squat"
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// e.g. "chest", "legs"
    pub main_muscle_group: String,
    /// e.g. ["shoulders", "triceps"]
    #[serde(default)]
    pub secondary_muscle_groups: Vec<String>,
    /// Exact muscles targeted, e.g. ["pectoralis major", "triceps brachii"]
    #[serde(default)]
    pub muscles: Vec<String>,
    /// e.g. ["barbell", "bench"]
    #[serde(default)]
    pub equipment: Vec<String>,
    /// Step-by-step instructions; order is significant
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub video_url: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

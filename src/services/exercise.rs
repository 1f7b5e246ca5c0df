// SPDX-License-Identifier: MIT

//! Read-only exercise catalog.

use crate::db::FirestoreDb;
use crate::error::Result;
use crate::models::Exercise;

/// Service exposing the pre-seeded exercise catalog.
#[derive(Clone)]
pub struct ExerciseService {
    db: FirestoreDb,
}

impl ExerciseService {
    pub fn new(db: FirestoreDb) -> Self {
        Self { db }
    }

    /// List all catalog entries, unfiltered and unpaginated.
    pub async fn list(&self) -> Result<Vec<Exercise>> {
        let exercises = self.db.list_exercises().await?;
        tracing::debug!(count = exercises.len(), "Fetched exercise catalog");
        Ok(exercises)
    }
}

// SPDX-License-Identifier: MIT

//! Firestore client wrapper with typed operations.
//!
//! Provides high-level operations for:
//! - Users (registration, profile storage)
//! - Exercises (read-only catalog)
//! - Workout plans (per-user weekly schedules)
//!
//! Firestore has no unique indexes, so uniqueness of `email` and `phone`
//! is checked by query before the write. The check-then-write pair is not
//! transactional; the remaining race window is an accepted relaxed
//! invariant for this domain.

use crate::db::collections;
use crate::error::AppError;
use crate::models::{Exercise, User, WorkoutPlan};

/// Firestore database client.
#[derive(Clone)]
pub struct FirestoreDb {
    client: Option<firestore::FirestoreDb>,
}

impl FirestoreDb {
    /// Create a new Firestore client.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(project_id: &str) -> Result<Self, AppError> {
        // If the emulator environment variable is set, use unauthenticated connection
        // to avoid local credential warnings and leakage.
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> Result<Self, AppError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        // Use ExternalJwtFunctionSource to provide a dummy token without needing async-trait
        // or a custom TokenSource implementation struct.
        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Database(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a mock Firestore client for testing (offline mode).
    ///
    /// All database operations will return an error if called.
    pub fn new_mock() -> Self {
        Self { client: None }
    }

    /// Helper to get the client or return an error if offline.
    fn get_client(&self) -> Result<&firestore::FirestoreDb, AppError> {
        self.client
            .as_ref()
            .ok_or_else(|| AppError::Database("Database not connected (offline mode)".to_string()))
    }

    // ─── User Operations ─────────────────────────────────────────

    /// Get a user by internal document ID.
    pub async fn get_user(&self, id: &str) -> Result<Option<User>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collections::USERS)
            .obj()
            .one(id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Find a user by the externally-issued `userid` field.
    pub async fn find_user_by_userid(&self, userid: &str) -> Result<Option<User>, AppError> {
        let userid = userid.to_string();
        let users: Vec<User> = self
            .get_client()?
            .fluent()
            .select()
            .from(collections::USERS)
            .filter(move |q| q.field("userid").eq(userid.clone()))
            .limit(1)
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(users.into_iter().next())
    }

    /// Find a user by email.
    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let email = email.to_string();
        let users: Vec<User> = self
            .get_client()?
            .fluent()
            .select()
            .from(collections::USERS)
            .filter(move |q| q.field("email").eq(email.clone()))
            .limit(1)
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(users.into_iter().next())
    }

    /// Find a user by phone number.
    pub async fn find_user_by_phone(&self, phone: &str) -> Result<Option<User>, AppError> {
        let phone = phone.to_string();
        let users: Vec<User> = self
            .get_client()?
            .fluent()
            .select()
            .from(collections::USERS)
            .filter(move |q| q.field("phone").eq(phone.clone()))
            .limit(1)
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(users.into_iter().next())
    }

    /// Insert a new user, enforcing uniqueness of `email` and `phone`.
    ///
    /// The duplicate check lives here so callers get a tagged
    /// `DuplicateKey` carrying the offending field instead of having to
    /// sniff a store error.
    pub async fn insert_user(&self, user: &User) -> Result<(), AppError> {
        if self.find_user_by_email(&user.email).await?.is_some() {
            return Err(AppError::DuplicateKey {
                field: "email".to_string(),
            });
        }
        if let Some(phone) = &user.phone {
            if self.find_user_by_phone(phone).await?.is_some() {
                return Err(AppError::DuplicateKey {
                    field: "phone".to_string(),
                });
            }
        }
        self.set_user(user).await
    }

    /// Create or update a user document.
    pub async fn set_user(&self, user: &User) -> Result<(), AppError> {
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::USERS)
            .document_id(&user.id)
            .object(user)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    // ─── Exercise Operations ─────────────────────────────────────

    /// List the entire exercise catalog, unfiltered.
    pub async fn list_exercises(&self) -> Result<Vec<Exercise>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .from(collections::EXERCISES)
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Store a catalog entry. The API never writes exercises; this exists
    /// for seeding (tests, ops tooling).
    pub async fn set_exercise(&self, exercise: &Exercise) -> Result<(), AppError> {
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::EXERCISES)
            .document_id(&exercise.id)
            .object(exercise)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    // ─── Workout Plan Operations ─────────────────────────────────

    /// Get a workout plan by document ID.
    pub async fn get_plan(&self, id: &str) -> Result<Option<WorkoutPlan>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collections::WORKOUT_PLANS)
            .obj()
            .one(id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get all plans belonging to a user, regardless of status.
    pub async fn get_plans_for_user(&self, user_id: &str) -> Result<Vec<WorkoutPlan>, AppError> {
        let user_id = user_id.to_string();
        self.get_client()?
            .fluent()
            .select()
            .from(collections::WORKOUT_PLANS)
            .filter(move |q| q.field("userId").eq(user_id.clone()))
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create or update a workout plan document.
    pub async fn set_plan(&self, plan: &WorkoutPlan) -> Result<(), AppError> {
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::WORKOUT_PLANS)
            .document_id(&plan.id)
            .object(plan)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    /// Delete a workout plan by document ID.
    ///
    /// Firestore deletes are idempotent; callers that need 404 semantics
    /// check existence first.
    pub async fn delete_plan(&self, id: &str) -> Result<(), AppError> {
        self.get_client()?
            .fluent()
            .delete()
            .from(collections::WORKOUT_PLANS)
            .document_id(id)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }
}

// SPDX-License-Identifier: MIT

//! User registration and profile management.

use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::db::FirestoreDb;
use crate::error::{AppError, Result};
use crate::models::user::FriendRequests;
use crate::models::{Preferences, User, UserProfile, UserStats};

/// Registration payload.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    /// Externally-issued ID (e.g. Firebase Auth UID)
    pub userid: String,
    #[validate(nested)]
    #[serde(default)]
    pub profile: Option<UserProfile>,
    #[serde(default)]
    pub phone: Option<String>,
    /// Accepted for client compatibility; age lives on the profile and a
    /// top-level value is not persisted.
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub preferences: Option<Preferences>,
}

/// Service for user registration and profile reads/writes.
#[derive(Clone)]
pub struct UserService {
    db: FirestoreDb,
}

impl UserService {
    pub fn new(db: FirestoreDb) -> Self {
        Self { db }
    }

    /// Register a new user with default stats and preferences.
    ///
    /// Uniqueness of email and phone is enforced by the repository, which
    /// reports the offending field in a tagged `DuplicateKey` error.
    pub async fn register(&self, req: RegisterRequest) -> Result<User> {
        if req.email.trim().is_empty() || req.userid.trim().is_empty() {
            return Err(AppError::Validation(
                "Email and user ID are required".to_string(),
            ));
        }
        req.validate()?;

        if req.age.is_some() {
            tracing::debug!("Ignoring top-level age; age belongs to the profile");
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4().to_string(),
            email: req.email,
            phone: req.phone,
            userid: req.userid,
            profile: req.profile,
            preferences: req.preferences.unwrap_or_default(),
            is_active: true,
            is_email_verified: false,
            friends: Vec::new(),
            friend_requests: FriendRequests::default(),
            stats: UserStats::new(now),
            created_at: now,
            updated_at: now,
        };

        self.db.insert_user(&user).await?;
        tracing::info!(user_id = %user.id, "User registered");

        Ok(user)
    }

    /// Replace a user's profile sub-document, looked up by INTERNAL id.
    pub async fn create_profile(&self, user_id: &str, profile: UserProfile) -> Result<User> {
        if user_id.trim().is_empty() {
            return Err(AppError::Validation(
                "User ID and profile data are required".to_string(),
            ));
        }
        profile.validate()?;

        let mut user = self
            .db
            .get_user(user_id)
            .await?
            .ok_or(AppError::UserNotFound)?;

        user.profile = Some(profile);
        user.updated_at = Utc::now();
        self.db.set_user(&user).await?;

        tracing::info!(user_id = %user.id, "Profile updated");
        Ok(user)
    }

    /// Fetch a user by the EXTERNAL `userid` field.
    ///
    /// Note the asymmetry with `create_profile`: reads key on the external
    /// identifier, writes on the internal one. Existing clients depend on
    /// this contract.
    pub async fn get_profile(&self, userid: &str) -> Result<User> {
        if userid.trim().is_empty() {
            return Err(AppError::Validation("User ID is required".to_string()));
        }

        self.db
            .find_user_by_userid(userid)
            .await?
            .ok_or(AppError::UserNotFound)
    }
}

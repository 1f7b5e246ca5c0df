// SPDX-License-Identifier: MIT

//! User routes: registration, profile creation, profile lookup.

use crate::error::{AppError, Result};
use crate::models::{User, UserProfile};
use crate::services::RegisterRequest;
use crate::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// User routes, mounted under `/api/user`.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/register", post(register))
        .route("/createprofile", post(create_profile))
        .route("/profile", get(get_profile))
}

/// Success envelope for user endpoints. Kept for compatibility with the
/// mobile client, which unwraps `data`.
#[derive(Serialize)]
pub struct UserEnvelope {
    pub success: bool,
    pub message: String,
    pub data: User,
}

/// Register a new user.
async fn register(
    State(state): State<Arc<AppState>>,
    WithRejection(Json(payload), _): WithRejection<Json<RegisterRequest>, AppError>,
) -> Result<(StatusCode, Json<UserEnvelope>)> {
    let user = state.user_service.register(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(UserEnvelope {
            success: true,
            message: "User registered successfully".to_string(),
            data: user,
        }),
    ))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateProfileRequest {
    user_id: String,
    profile_data: UserProfile,
}

/// Attach or replace a user's profile, keyed by internal user id.
async fn create_profile(
    State(state): State<Arc<AppState>>,
    WithRejection(Json(payload), _): WithRejection<Json<CreateProfileRequest>, AppError>,
) -> Result<Json<UserEnvelope>> {
    let user = state
        .user_service
        .create_profile(&payload.user_id, payload.profile_data)
        .await?;

    Ok(Json(UserEnvelope {
        success: true,
        message: "Profile created successfully".to_string(),
        data: user,
    }))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProfileQuery {
    /// The EXTERNAL userid, not the internal document id
    user_id: Option<String>,
}

/// Fetch a user by external userid.
async fn get_profile(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ProfileQuery>,
) -> Result<Json<UserEnvelope>> {
    let user = state
        .user_service
        .get_profile(params.user_id.as_deref().unwrap_or(""))
        .await?;

    Ok(Json(UserEnvelope {
        success: true,
        message: "Profile retrieved successfully".to_string(),
        data: user,
    }))
}

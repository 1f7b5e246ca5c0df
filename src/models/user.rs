// SPDX-License-Identifier: MIT

//! User model for storage and API.
//!
//! The wire format is camelCase throughout, matching what the mobile client
//! already speaks. Field-level constraints that the document store cannot
//! enforce are expressed with `validator` and checked before every write.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// User document stored in Firestore.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Internal surrogate ID (also used as document ID)
    pub id: String,
    /// Email address, unique across users
    pub email: String,
    /// Phone number, unique if present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Externally-issued ID (e.g. from Firebase Auth); opaque to us
    pub userid: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<UserProfile>,
    #[serde(default)]
    pub preferences: Preferences,

    // Account status
    pub is_active: bool,
    pub is_email_verified: bool,

    // Friend system: data model only, no service behavior yet
    #[serde(default)]
    pub friends: Vec<Friend>,
    #[serde(default)]
    pub friend_requests: FriendRequests,

    pub stats: UserStats,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Profile sub-document, attached after registration and replaced wholesale
/// by the create-profile call.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[validate(nested)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<Height>,
    #[validate(nested)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<Weight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fitness_level: Option<FitnessLevel>,
    /// Free-form bio, capped at 500 characters
    #[validate(length(max = 500))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Avatar URL (http/https only)
    #[validate(custom(function = validate_http_url))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gender {
    Male,
    Female,
    Other,
    PreferNotToSay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitnessLevel {
    Beginner,
    Intermediate,
    Advanced,
}

/// Height measurement with unit.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Height {
    #[validate(range(min = 0.0))]
    pub value: f64,
    pub unit: HeightUnit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeightUnit {
    Cm,
    Ft,
}

/// Weight measurement with unit.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Weight {
    #[validate(range(min = 0.0))]
    pub value: f64,
    pub unit: WeightUnit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    Kg,
    Lbs,
}

/// User preferences. Partial objects are filled with per-field defaults,
/// so `{ "theme": "dark" }` is a complete preferences value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(default)]
    pub weight_unit: WeightUnit,
    #[serde(default)]
    pub time_format: TimeFormat,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub notifications: NotificationPrefs,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            weight_unit: WeightUnit::default(),
            time_format: TimeFormat::default(),
            theme: Theme::default(),
            notifications: NotificationPrefs::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeFormat {
    #[serde(rename = "12h")]
    Twelve,
    #[default]
    #[serde(rename = "24h")]
    TwentyFour,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    Auto,
}

/// Notification toggles, all on by default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPrefs {
    #[serde(default = "default_true")]
    pub workout_reminders: bool,
    #[serde(default = "default_true")]
    pub friend_requests: bool,
    #[serde(default = "default_true")]
    pub achievements: bool,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            workout_reminders: true,
            friend_requests: true,
            achievements: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Confirmed friendship, referencing another user by internal ID.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Friend {
    pub user: String,
    pub added_at: DateTime<Utc>,
}

/// Pending friend requests in both directions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FriendRequests {
    #[serde(default)]
    pub sent: Vec<SentFriendRequest>,
    #[serde(default)]
    pub received: Vec<ReceivedFriendRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentFriendRequest {
    pub to: String,
    pub sent_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceivedFriendRequest {
    pub from: String,
    pub received_at: DateTime<Utc>,
}

/// Lifetime workout stats, zeroed at registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    #[serde(default)]
    pub total_workouts: u32,
    #[serde(default)]
    pub current_streak: u32,
    #[serde(default)]
    pub longest_streak: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_workout_date: Option<DateTime<Utc>>,
    pub joined_at: DateTime<Utc>,
}

impl UserStats {
    /// Fresh stats for a newly registered user.
    pub fn new(joined_at: DateTime<Utc>) -> Self {
        Self {
            total_workouts: 0,
            current_streak: 0,
            longest_streak: 0,
            last_workout_date: None,
            joined_at,
        }
    }
}

fn validate_http_url(value: &str) -> Result<(), ValidationError> {
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(())
    } else {
        Err(ValidationError::new("url_scheme"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preferences_fill_defaults_from_partial_object() {
        let prefs: Preferences = serde_json::from_str(r#"{"theme": "dark"}"#).unwrap();

        assert_eq!(prefs.weight_unit, WeightUnit::Kg);
        assert_eq!(prefs.time_format, TimeFormat::TwentyFour);
        assert_eq!(prefs.theme, Theme::Dark);
        assert!(prefs.notifications.workout_reminders);
        assert!(prefs.notifications.friend_requests);
        assert!(prefs.notifications.achievements);
    }

    #[test]
    fn test_gender_rejects_unknown_value() {
        let result: Result<UserProfile, _> =
            serde_json::from_str(r#"{"gender": "unspecified"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_profile_bio_length_limit() {
        let profile = UserProfile {
            bio: Some("a".repeat(501)),
            ..Default::default()
        };
        assert!(profile.validate().is_err());

        let profile = UserProfile {
            bio: Some("short bio".to_string()),
            ..Default::default()
        };
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_profile_picture_must_be_http_url() {
        let profile = UserProfile {
            profile_picture: Some("ftp://example.com/me.jpg".to_string()),
            ..Default::default()
        };
        assert!(profile.validate().is_err());

        let profile = UserProfile {
            profile_picture: Some("https://example.com/me.jpg".to_string()),
            ..Default::default()
        };
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_negative_weight_rejected() {
        let profile = UserProfile {
            weight: Some(Weight {
                value: -1.0,
                unit: WeightUnit::Kg,
            }),
            ..Default::default()
        };
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_time_format_wire_names() {
        assert_eq!(
            serde_json::to_string(&TimeFormat::Twelve).unwrap(),
            r#""12h""#
        );
        assert_eq!(
            serde_json::to_string(&TimeFormat::TwentyFour).unwrap(),
            r#""24h""#
        );
    }
}

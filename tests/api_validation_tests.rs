// SPDX-License-Identifier: MIT

//! Input validation tests against the real router with an offline store.
//!
//! Every request here must be rejected (or answered) before any store
//! access: the mock database turns any store call into a 500, so a 400
//! also proves ordering.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use tower::ServiceExt;

mod common;

fn json_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_register_missing_email_rejected() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(json_post(
            "/api/user/register",
            r#"{"userid": "firebase-uid-1"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = common::body_json(response).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_register_empty_email_rejected_before_store() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(json_post(
            "/api/user/register",
            r#"{"email": "", "userid": "firebase-uid-1"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = common::body_json(response).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_register_overlong_bio_rejected() {
    let (app, _state) = common::create_test_app();

    let bio = "a".repeat(501);
    let payload = format!(
        r#"{{"email": "a@b.com", "userid": "u1", "profile": {{"bio": "{}"}}}}"#,
        bio
    );

    let response = app
        .oneshot(json_post("/api/user/register", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = common::body_json(response).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_create_profile_missing_profile_data_rejected() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(json_post(
            "/api/user/createprofile",
            r#"{"userId": "some-id"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = common::body_json(response).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_get_profile_requires_user_id_param() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/user/profile")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = common::body_json(response).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_get_workout_plans_requires_user_id_param() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/workout/GetWorkoutPlans")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = common::body_json(response).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_create_plan_missing_difficulty_rejected() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(json_post(
            "/api/workout/CreateWorkoutPlan",
            r#"{"userId": "u1", "name": "PPL", "estimatedDuration": 60}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = common::body_json(response).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_create_plan_unknown_difficulty_rejected() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(json_post(
            "/api/workout/CreateWorkoutPlan",
            r#"{"userId": "u1", "name": "PPL", "difficulty": "expert", "estimatedDuration": 60}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_plan_rpe_out_of_range_rejected() {
    let (app, _state) = common::create_test_app();

    let payload = r#"{
        "userId": "u1",
        "name": "Push day plan",
        "difficulty": "intermediate",
        "estimatedDuration": 45,
        "weeklySchedule": {
            "monday": {
                "name": "Push",
                "exercises": [{
                    "exerciseId": "e1",
                    "exerciseName": "Bench Press",
                    "muscleGroup": "chest",
                    "order": 1,
                    "sets": [{"type": "normal", "targetRPE": 11}]
                }]
            }
        }
    }"#;

    let response = app
        .oneshot(json_post("/api/workout/CreateWorkoutPlan", payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = common::body_json(response).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_get_plan_by_id_requires_id_param() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/workout/GetWorkoutPlanById")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_store_failure_maps_to_server_error_envelope() {
    // The offline mock errors on any store access, so a well-formed
    // register surfaces the SERVER_ERROR envelope.
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(json_post(
            "/api/user/register",
            r#"{"email": "a@b.com", "userid": "u1"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = common::body_json(response).await;
    assert_eq!(body["error"], "SERVER_ERROR");
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_root_and_health_endpoints() {
    let (app, _state) = common::create_test_app();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["status"], "ok");
}

//! Login and public endpoint tests.

mod common;

use axum::http::StatusCode;
use common::{admin_token, app_with_failing_user_store, body_json, request, stale_token, test_app};
use serde_json::json;

#[tokio::test]
async fn login_issues_a_usable_token() {
    let app = test_app();

    let response = request("POST", "/auth/login")
        .json(json!({"username": "admin01", "password": "adminpwd01"}))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let token = body["token"].as_str().expect("token").to_string();
    assert!(body["expires_in"].as_u64().unwrap() > 0);

    let response = request("GET", "/api/places")
        .bearer(&token)
        .send(app)
        .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn login_with_bad_credentials_is_401() {
    let app = test_app();

    let response = request("POST", "/auth/login")
        .json(json!({"username": "admin01", "password": "wrong"}))
        .send(app)
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn root_banner_and_health_are_public() {
    let app = test_app();

    let response = request("GET", "/").send(app.clone()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["name"], "Places API");

    let response = request("GET", "/health").send(app).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn user_lookup_fault_is_503_while_bad_credentials_stay_401() {
    // A lookup-layer fault must surface as unavailable, never as a
    // failed login.
    let app = app_with_failing_user_store();

    let response = request("GET", "/api/places")
        .bearer(&admin_token())
        .send(app.clone())
        .await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let response = request("DELETE", "/api/places/some-id")
        .bearer(&admin_token())
        .send(app.clone())
        .await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let response = request("POST", "/auth/login")
        .json(json!({"username": "admin01", "password": "adminpwd01"}))
        .send(app)
        .await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    // Against a healthy store, credentials no user matches are still 401
    let app = test_app();
    let response = request("GET", "/api/places")
        .bearer(&stale_token())
        .send(app)
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn unknown_path_is_404() {
    let app = test_app();
    let response = request("GET", "/api/nowhere").send(app).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

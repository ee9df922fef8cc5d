#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::util::ServiceExt;

use places_api::auth::{generate_jwt, Claims};
use places_api::models::User;
use places_api::store::{MemoryCategoryStore, MemoryPlaceStore, StoreError, UserStore};
use places_api::{app, AppState};

/// Fresh router over empty place/category stores plus the provisioned
/// admin and member accounts. One per test keeps store state isolated.
pub fn test_app() -> Router {
    app(AppState::in_memory())
}

/// User store whose lookups always fault, for driving the
/// lookup-unavailable path.
pub struct FailingUserStore;

#[async_trait]
impl UserStore for FailingUserStore {
    async fn check_user(
        &self,
        _username: &str,
        _password: &str,
    ) -> Result<Option<User>, StoreError> {
        Err(StoreError::Unavailable("user backend offline".to_string()))
    }
}

/// Router whose user lookups fault on every request.
pub fn app_with_failing_user_store() -> Router {
    app(AppState {
        places: Arc::new(MemoryPlaceStore::new()),
        types: Arc::new(MemoryCategoryStore::new()),
        users: Arc::new(FailingUserStore),
    })
}

/// Token for the admin account (all capabilities).
pub fn admin_token() -> String {
    generate_jwt(Claims::new("admin01".to_string(), "adminpwd01".to_string()))
        .expect("token generation")
}

/// Token for the member account (no mutation capabilities).
pub fn member_token() -> String {
    generate_jwt(Claims::new("member03".to_string(), "mempwd03".to_string()))
        .expect("token generation")
}

/// Correctly signed token for credentials no user record matches.
pub fn stale_token() -> String {
    generate_jwt(Claims::new("ghost01".to_string(), "ghostpwd".to_string()))
        .expect("token generation")
}

pub struct RequestBuilder {
    method: &'static str,
    path: String,
    token: Option<String>,
    content_type: Option<&'static str>,
    body: Option<String>,
}

pub fn request(method: &'static str, path: &str) -> RequestBuilder {
    RequestBuilder {
        method,
        path: path.to_string(),
        token: None,
        content_type: None,
        body: None,
    }
}

impl RequestBuilder {
    pub fn bearer(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    pub fn json(mut self, body: Value) -> Self {
        self.content_type = Some("application/json");
        self.body = Some(body.to_string());
        self
    }

    /// Raw body with an explicit content type, for exercising the
    /// content-type gate.
    pub fn raw(mut self, content_type: &'static str, body: &str) -> Self {
        self.content_type = Some(content_type);
        self.body = Some(body.to_string());
        self
    }

    pub async fn send(self, app: Router) -> Response<axum::body::Body> {
        let mut builder = Request::builder().method(self.method).uri(&self.path);
        if let Some(token) = &self.token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        if let Some(content_type) = self.content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        let request = builder
            .body(self.body.map(Body::from).unwrap_or_else(Body::empty))
            .expect("request");

        app.oneshot(request).await.expect("response")
    }
}

pub async fn body_json(response: Response<axum::body::Body>) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("json body")
}

/// Create a place through the API as admin and return (id, creation body).
pub async fn create_place(app: Router, name: &str) -> (String, Value) {
    let response = request("POST", "/api/places")
        .bearer(&admin_token())
        .json(serde_json::json!({
            "place_name": name,
            "place_type": "T0001",
            "latitude": 10.0,
            "longitude": 20.0
        }))
        .send(app)
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    let id = body["place_id"].as_str().expect("assigned id").to_string();
    (id, body)
}

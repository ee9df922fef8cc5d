// Request handlers
//
// Every mutating endpoint runs the same gate in a fixed order, failing on
// the first violation: resolve the principal against the user store (401,
// or 503 on a lookup fault), check the group capability (403), check
// content type and body shape (400), check the target exists (404), then
// touch the store (503 on fault). Reads stop after authentication.

pub mod login;
pub mod places;
pub mod types;

use axum::body::Bytes;
use axum::http::{header, HeaderMap};
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::config;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::models::{Capability, User};
use crate::state::AppState;

const CONTENT_TYPE_JSON: &str = "application/json";

/// Pipeline step 2: resolve verified claims to a User with its group.
/// `Ok(None)` from the store means bad credentials (401); only a
/// lookup-layer fault becomes 503.
pub(crate) async fn authenticate(
    state: &AppState,
    principal: &AuthUser,
) -> Result<User, ApiError> {
    match state
        .users
        .check_user(&principal.username, &principal.password)
        .await
    {
        Ok(Some(user)) => Ok(user),
        Ok(None) => Err(ApiError::unauthorized("unknown user or bad credentials")),
        Err(e) => {
            tracing::error!("user lookup failed: {}", e);
            Err(ApiError::service_unavailable("user lookup unavailable"))
        }
    }
}

/// Pipeline step 3: capability check against the user's group.
pub(crate) fn require_capability(user: &User, capability: Capability) -> Result<(), ApiError> {
    if user.group.allows(capability) {
        Ok(())
    } else {
        Err(ApiError::forbidden(format!(
            "group '{}' may not perform {:?}",
            user.group.group_name, capability
        )))
    }
}

/// Pipeline step 4, first half: the declared content type must be JSON and
/// the body must parse. Shape validation runs on the returned value.
pub(crate) fn parse_json_body(headers: &HeaderMap, body: &Bytes) -> Result<Value, ApiError> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.split(';').next().unwrap_or("").trim().to_ascii_lowercase())
        .unwrap_or_default();

    if content_type != CONTENT_TYPE_JSON {
        return Err(ApiError::bad_request(format!(
            "Content-Type must be {}",
            CONTENT_TYPE_JSON
        )));
    }

    serde_json::from_slice(body).map_err(|e| ApiError::bad_request(format!("invalid JSON: {}", e)))
}

/// Offset/limit listing parameters, defaulted when omitted.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub offset: Option<usize>,
    pub limit: Option<usize>,
}

impl ListQuery {
    pub fn offset(&self) -> usize {
        self.offset.unwrap_or(0)
    }

    pub fn limit(&self) -> usize {
        self.limit.unwrap_or(config::config().api.default_limit)
    }
}

/// Catch-all for verb/path combinations outside the API surface, e.g.
/// POST against `/api/places/:id`.
pub async fn route_not_found() -> ApiError {
    ApiError::not_found("no such route")
}

pub async fn root() -> Json<Value> {
    Json(json!({
        "name": "Places API",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "CRUD over places and place categories with token auth",
        "endpoints": {
            "login": "/auth/login (public - token acquisition)",
            "places": "/api/places[/:id] (protected)",
            "types": "/api/types[/:id] (protected)",
        }
    }))
}

pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timestamp": Utc::now(),
    }))
}

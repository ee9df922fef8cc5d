// POST /auth/login - authenticate and receive a token for the /api routes

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::auth::{generate_jwt, Claims};
use crate::config;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::state::AppState;

use super::authenticate;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub expires_in: u64,
}

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let principal = AuthUser {
        username: payload.username,
        password: payload.password,
    };
    let user = authenticate(&state, &principal).await?;

    let token = generate_jwt(Claims::new(user.username, user.password)).map_err(|e| {
        tracing::error!("token generation failed: {}", e);
        ApiError::service_unavailable("token generation failed")
    })?;

    Ok(Json(LoginResponse {
        token,
        expires_in: config::config().security.jwt_expiry_hours * 3600,
    }))
}

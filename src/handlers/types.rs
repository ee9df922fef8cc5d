// /api/types handlers. Same gate as the place family, applied to the
// category entity.

use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::{Extension, Json};

use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::models::{Capability, Category};
use crate::state::AppState;
use crate::validation;

use super::{authenticate, parse_json_body, require_capability, ListQuery};

/// GET /api/types
pub async fn list(
    State(state): State<AppState>,
    Extension(principal): Extension<AuthUser>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Category>>, ApiError> {
    authenticate(&state, &principal).await?;

    let categories = state.types.list(query.offset(), query.limit()).await?;
    Ok(Json(categories))
}

/// GET /api/types/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Extension(principal): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<Category>, ApiError> {
    authenticate(&state, &principal).await?;

    match state.types.get_by_id(&id).await? {
        Some(category) => Ok(Json(category)),
        None => Err(ApiError::not_found("category not found")),
    }
}

/// POST /api/types
pub async fn create(
    State(state): State<AppState>,
    Extension(principal): Extension<AuthUser>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let user = authenticate(&state, &principal).await?;
    require_capability(&user, Capability::Insert)?;

    let payload = parse_json_body(&headers, &body)?;
    validation::validate_category(&payload)?;
    let category: Category = serde_json::from_value(payload)
        .map_err(|e| ApiError::bad_request(format!("invalid category payload: {}", e)))?;

    let created = state.types.insert(category).await?;
    let location = format!("/types/{}", created.type_id.as_deref().unwrap_or_default());

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

/// PUT /api/types/:id
pub async fn update(
    State(state): State<AppState>,
    Extension(principal): Extension<AuthUser>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let user = authenticate(&state, &principal).await?;
    require_capability(&user, Capability::Update)?;

    let payload = parse_json_body(&headers, &body)?;
    validation::validate_category(&payload)?;
    let category: Category = serde_json::from_value(payload)
        .map_err(|e| ApiError::bad_request(format!("invalid category payload: {}", e)))?;

    if category.type_id.as_deref() != Some(id.as_str()) {
        return Err(ApiError::bad_request(
            "type_id in body must match the id in the path",
        ));
    }

    if state.types.get_by_id(&id).await?.is_none() {
        return Err(ApiError::not_found("category not found"));
    }

    state.types.update(category).await?;
    Ok(StatusCode::OK)
}

/// DELETE /api/types/:id
pub async fn remove(
    State(state): State<AppState>,
    Extension(principal): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let user = authenticate(&state, &principal).await?;
    require_capability(&user, Capability::Delete)?;

    if state.types.get_by_id(&id).await?.is_none() {
        return Err(ApiError::not_found("category not found"));
    }

    state.types.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

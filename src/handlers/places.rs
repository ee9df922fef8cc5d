// /api/places handlers

use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::{Extension, Json};

use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::models::{Capability, Place};
use crate::state::AppState;
use crate::validation;

use super::{authenticate, parse_json_body, require_capability, ListQuery};

/// GET /api/places
pub async fn list(
    State(state): State<AppState>,
    Extension(principal): Extension<AuthUser>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Place>>, ApiError> {
    authenticate(&state, &principal).await?;

    let places = state.places.list(query.offset(), query.limit()).await?;
    Ok(Json(places))
}

/// GET /api/places/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Extension(principal): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<Place>, ApiError> {
    authenticate(&state, &principal).await?;

    match state.places.get_by_id(&id).await? {
        Some(place) => Ok(Json(place)),
        None => Err(ApiError::not_found("place not found")),
    }
}

/// POST /api/places
pub async fn create(
    State(state): State<AppState>,
    Extension(principal): Extension<AuthUser>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let user = authenticate(&state, &principal).await?;
    require_capability(&user, Capability::Insert)?;

    let payload = parse_json_body(&headers, &body)?;
    validation::validate_place(&payload)?;
    let place: Place = serde_json::from_value(payload)
        .map_err(|e| ApiError::bad_request(format!("invalid place payload: {}", e)))?;

    let created = state.places.insert(place).await?;
    let location = format!(
        "/places/{}",
        created.place_id.as_deref().unwrap_or_default()
    );

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

/// PUT /api/places/:id
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
    validation::validate_place(&payload)?;
    let place: Place = serde_json::from_value(payload)
        .map_err(|e| ApiError::bad_request(format!("invalid place payload: {}", e)))?;

    // The body must name the same resource as the URL, checked before any
    // store interaction.
    if place.place_id.as_deref() != Some(id.as_str()) {
        return Err(ApiError::bad_request(
            "place_id in body must match the id in the path",
        ));
    }

    if state.places.get_by_id(&id).await?.is_none() {
        return Err(ApiError::not_found("place not found"));
    }

    state.places.update(place).await?;
    Ok(StatusCode::OK)
}

/// DELETE /api/places/:id
pub async fn remove(
    State(state): State<AppState>,
    Extension(principal): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let user = authenticate(&state, &principal).await?;
    require_capability(&user, Capability::Delete)?;

    if state.places.get_by_id(&id).await?.is_none() {
        return Err(ApiError::not_found("place not found"));
    }

    state.places.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

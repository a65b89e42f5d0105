//! Handlers for the breed CRUD endpoints.
//!
//! Validation runs before any service call: field shapes are checked via
//! the DTOs' `validate()` methods, path ids must parse as positive
//! integers, and malformed JSON bodies are mapped to 400 instead of axum's
//! default rejection.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use warren_core::types::DbId;
use warren_db::models::breed::{AddBreedRequest, Breed};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/v1/breeds
///
/// List all breeds with their category and alternate names, sorted by name.
pub async fn list_breeds(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let breeds = state.breeds.list_breeds().await?;

    Ok(Json(breeds))
}

/// GET /api/v1/breeds/{id}
pub async fn get_breed(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_breed_id(&raw_id)?;
    let breed = state.breeds.get_breed(id).await?;

    Ok(Json(breed))
}

/// POST /api/v1/breeds
///
/// Add a breed and return it with the generated id.
pub async fn add_breed(
    State(state): State<AppState>,
    body: Result<Json<AddBreedRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(request) = body.map_err(bad_json)?;
    request.validate()?;

    let breed = state.breeds.add_breed(request).await?;

    Ok((StatusCode::CREATED, Json(breed)))
}

/// PUT /api/v1/breeds
///
/// Replace a breed's base fields and children wholesale. The body carries
/// the id.
pub async fn modify_breed(
    State(state): State<AppState>,
    body: Result<Json<Breed>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(breed) = body.map_err(bad_json)?;
    breed.validate()?;

    let breed = state.breeds.modify_breed(breed).await?;

    Ok(Json(breed))
}

/// DELETE /api/v1/breeds/{id}
///
/// Returns 200 with an empty body on success.
pub async fn delete_breed(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_breed_id(&raw_id)?;
    state.breeds.delete_breed(id).await?;

    Ok(StatusCode::OK)
}

/// Path ids must be positive integers; anything else is rejected before the
/// service layer runs.
fn parse_breed_id(raw: &str) -> Result<DbId, AppError> {
    raw.parse::<DbId>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| {
            AppError::BadRequest(format!(
                "Invalid breed id '{raw}': expected a positive integer"
            ))
        })
}

fn bad_json(rejection: JsonRejection) -> AppError {
    AppError::BadRequest(rejection.body_text())
}

//! User Handlers
//!
//! HTTP handlers for user CRUD operations.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use validator::Validate;

use crate::domain::models::user::CreateUserData;
use crate::infrastructure::driven_adapters::config::NotFoundPolicy;
use crate::infrastructure::driving_adapters::api_rest::dto::user::{
    CreateUserDto, UpdateUserDto, UserResponseDto,
};
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::{ApiError, FieldError, UseCaseError};

/// Create the router for user endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route(
            "/{id}",
            get(get_user_by_id).put(update_user).delete(delete_user),
        )
}

/// GET /user - List all users
///
/// # Responses
///
/// * 200 OK - Array of users
#[axum::debug_handler]
async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserResponseDto>>, ApiError> {
    let users = state
        .list_users_use_case
        .execute()
        .await
        .map_err(|e| state.reject(e))?;

    Ok(Json(users.into_iter().map(UserResponseDto::from).collect()))
}

/// POST /user - Create a new user
///
/// A body that is not a JSON object fails validation like a bad field does.
///
/// # Responses
///
/// * 201 Created - User created successfully
/// * 500 Internal Server Error - Validation or store failure (400 for
///   validation under the uniform error mapping)
#[axum::debug_handler]
async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<UserResponseDto>), ApiError> {
    let Json(body) = payload.map_err(|rejection| {
        state.reject(UseCaseError::Validation(vec![FieldError::new(
            "body",
            rejection.body_text(),
        )]))
    })?;
    let dto = CreateUserDto::from_body(body).map_err(|e| state.reject(e))?;

    // Validate DTO
    dto.validate().map_err(|e| state.reject(e.into()))?;
    let data = CreateUserData::try_from(dto).map_err(|e| state.reject(e))?;

    let user = state
        .create_user_use_case
        .execute(data)
        .await
        .map_err(|e| state.reject(e))?;

    Ok((StatusCode::CREATED, Json(UserResponseDto::from(user))))
}

/// GET /user/{id} - Get a user by ID
///
/// # Responses
///
/// * 200 OK - User found (or `null` under the pass-through not-found policy)
/// * 404 Not Found - User does not exist
#[axum::debug_handler]
async fn get_user_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Option<UserResponseDto>>, ApiError> {
    match state.get_user_by_id_use_case.execute(&id).await {
        Ok(user) => Ok(Json(Some(UserResponseDto::from(user)))),
        Err(UseCaseError::NotFound { .. }) if state.not_found == NotFoundPolicy::Passthrough => Ok(Json(None)),
        Err(error) => Err(state.reject(error)),
    }
}

/// PUT /user/{id} - Update the provided fields of a user
///
/// # Responses
///
/// * 200 OK - User updated
/// * 400 Bad Request - Body is not valid JSON of the expected shape
/// * 500 Internal Server Error - Missing row or store failure (404 for a
///   missing row under the uniform error mapping)
#[axum::debug_handler]
async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateUserDto>, JsonRejection>,
) -> Result<Json<UserResponseDto>, ApiError> {
    let Json(dto) = payload?;

    let user = state
        .update_user_use_case
        .execute(&id, dto.into())
        .await
        .map_err(|e| state.reject(e))?;

    Ok(Json(UserResponseDto::from(user)))
}

/// DELETE /user/{id} - Delete a user
///
/// # Responses
///
/// * 200 OK - Empty object
/// * 500 Internal Server Error - Missing row or store failure (404 for a
///   missing row under the uniform error mapping)
#[axum::debug_handler]
async fn delete_user(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Value>, ApiError> {
    state
        .delete_user_use_case
        .execute(&id)
        .await
        .map_err(|e| state.reject(e))?;

    Ok(Json(json!({})))
}

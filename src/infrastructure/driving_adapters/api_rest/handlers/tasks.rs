//! Task Handlers
//!
//! HTTP handlers for task operations. Tasks cannot be deleted, and task
//! creation answers 200 rather than 201.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::get,
    Json, Router,
};

use crate::infrastructure::driven_adapters::config::NotFoundPolicy;
use crate::infrastructure::driving_adapters::api_rest::dto::task::{
    CreateTaskDto, TaskResponseDto, UpdateTaskDto,
};
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::{ApiError, UseCaseError};

/// Create the router for task endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_tasks).post(create_task))
        .route(
            "/{id}",
            get(get_task_by_id).put(update_task).patch(update_task),
        )
}

/// GET /task - List all tasks
#[axum::debug_handler]
async fn list_tasks(State(state): State<AppState>) -> Result<Json<Vec<TaskResponseDto>>, ApiError> {
    let tasks = state
        .list_tasks_use_case
        .execute()
        .await
        .map_err(|e| state.reject(e))?;

    Ok(Json(tasks.into_iter().map(TaskResponseDto::from).collect()))
}

/// POST /task - Create a new task
///
/// # Responses
///
/// * 200 OK - Task created with `completed: false`
/// * 400 Bad Request - Body is not valid JSON of the expected shape
#[axum::debug_handler]
async fn create_task(
    State(state): State<AppState>,
    payload: Result<Json<CreateTaskDto>, JsonRejection>,
) -> Result<Json<TaskResponseDto>, ApiError> {
    let Json(dto) = payload?;

    let task = state
        .create_task_use_case
        .execute(dto.into())
        .await
        .map_err(|e| state.reject(e))?;

    Ok(Json(TaskResponseDto::from(task)))
}

/// GET /task/{id} - Get a task by ID
///
/// # Responses
///
/// * 200 OK - Task found (or `null` under the pass-through not-found policy)
/// * 404 Not Found - Task does not exist
#[axum::debug_handler]
async fn get_task_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Option<TaskResponseDto>>, ApiError> {
    match state.get_task_by_id_use_case.execute(&id).await {
        Ok(task) => Ok(Json(Some(TaskResponseDto::from(task)))),
        Err(UseCaseError::NotFound { .. }) if state.not_found == NotFoundPolicy::Passthrough => Ok(Json(None)),
        Err(error) => Err(state.reject(error)),
    }
}

/// PUT|PATCH /task/{id} - Update the provided fields of a task
///
/// # Responses
///
/// * 200 OK - Task updated
/// * 400 Bad Request - Body is not valid JSON of the expected shape
/// * 500 Internal Server Error - Missing row or store failure (404 for a
///   missing row under the uniform error mapping)
#[axum::debug_handler]
async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateTaskDto>, JsonRejection>,
) -> Result<Json<TaskResponseDto>, ApiError> {
    let Json(dto) = payload?;

    let task = state
        .update_task_use_case
        .execute(&id, dto.into())
        .await
        .map_err(|e| state.reject(e))?;

    Ok(Json(TaskResponseDto::from(task)))
}

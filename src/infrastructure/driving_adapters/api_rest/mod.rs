//! REST API Module
//!
//! Contains HTTP handlers, DTOs, middleware and router assembly for the REST API.

pub mod dto;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::application::use_cases::tasks::{
    CreateTaskUseCase, GetTaskByIdUseCase, ListTasksUseCase, UpdateTaskUseCase,
};
use crate::application::use_cases::users::{
    CreateUserUseCase, DeleteUserUseCase, GetUserByIdUseCase, ListUsersUseCase, UpdateUserUseCase,
};
use crate::domain::gateways::{TaskRepository, UserRepository};
use crate::infrastructure::driven_adapters::config::{ApiConfig, ErrorMapping, NotFoundPolicy};
use crate::shared::errors::{ApiError, UseCaseError};

use self::handlers::{tasks, users};
use self::middleware::request_id::{make_request_span, REQUEST_ID_HEADER};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub not_found: NotFoundPolicy,
    pub error_mapping: ErrorMapping,
    pub list_users_use_case: Arc<ListUsersUseCase>,
    pub create_user_use_case: Arc<CreateUserUseCase>,
    pub get_user_by_id_use_case: Arc<GetUserByIdUseCase>,
    pub update_user_use_case: Arc<UpdateUserUseCase>,
    pub delete_user_use_case: Arc<DeleteUserUseCase>,
    pub list_tasks_use_case: Arc<ListTasksUseCase>,
    pub create_task_use_case: Arc<CreateTaskUseCase>,
    pub get_task_by_id_use_case: Arc<GetTaskByIdUseCase>,
    pub update_task_use_case: Arc<UpdateTaskUseCase>,
}

impl AppState {
    /// Wire every use case to the given repositories
    #[must_use]
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        task_repository: Arc<dyn TaskRepository>,
        api: &ApiConfig,
    ) -> Self {
        Self {
            not_found: api.not_found,
            error_mapping: api.error_mapping,
            list_users_use_case: Arc::new(ListUsersUseCase::new(user_repository.clone())),
            create_user_use_case: Arc::new(CreateUserUseCase::new(user_repository.clone())),
            get_user_by_id_use_case: Arc::new(GetUserByIdUseCase::new(user_repository.clone())),
            update_user_use_case: Arc::new(UpdateUserUseCase::new(user_repository.clone())),
            delete_user_use_case: Arc::new(DeleteUserUseCase::new(user_repository)),
            list_tasks_use_case: Arc::new(ListTasksUseCase::new(task_repository.clone())),
            create_task_use_case: Arc::new(CreateTaskUseCase::new(task_repository.clone())),
            get_task_by_id_use_case: Arc::new(GetTaskByIdUseCase::new(task_repository.clone())),
            update_task_use_case: Arc::new(UpdateTaskUseCase::new(task_repository)),
        }
    }

    /// Turn a use case failure into an HTTP error under the configured mapping
    #[must_use]
    pub fn reject(&self, error: UseCaseError) -> ApiError {
        ApiError::mapped(error, self.error_mapping)
    }
}

fn resource_routes() -> Router<AppState> {
    Router::new()
        .nest("/user", users::router())
        .nest("/task", tasks::router())
}

/// Build the application router
///
/// Resource routes are served bare (`/user`, `/task`) and again under
/// `prefix` (e.g. `/app/v1/user`) unless the prefix is empty.
pub fn router(state: AppState, prefix: &str) -> Router {
    let prefix = prefix.trim_end_matches('/');
    let mut app = resource_routes();
    if !prefix.is_empty() {
        app = app.nest(prefix, resource_routes());
    }

    app.layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::new(REQUEST_ID_HEADER.clone(), MakeRequestUuid))
            .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
            .layer(PropagateRequestIdLayer::new(REQUEST_ID_HEADER.clone())),
    )
    .layer(
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    )
    .with_state(state)
}

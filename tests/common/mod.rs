//! Common test utilities for e2e tests
//!
//! Builds the full application router on top of in-memory repositories, or
//! on top of a PostgreSQL container for the database-backed suite.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use testcontainers::{runners::AsyncRunner, ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tower::util::ServiceExt;

use user_task_api::infrastructure::driven_adapters::config::ApiConfig;
use user_task_api::infrastructure::driven_adapters::{
    database, InMemoryTaskRepository, InMemoryUserRepository, PostgresTaskRepository,
    PostgresUserRepository,
};
use user_task_api::infrastructure::driving_adapters::api_rest::{self, AppState};

/// Test application context
pub struct TestApp {
    pub router: Router,
}

impl TestApp {
    /// Create a test application with default API settings and empty in-memory stores
    pub fn new() -> Self {
        Self::with_api(ApiConfig::default())
    }

    /// Create a test application with the given API settings
    pub fn with_api(api: ApiConfig) -> Self {
        let state = AppState::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemoryTaskRepository::new()),
            &api,
        );

        Self {
            router: api_rest::router(state, &api.prefix),
        }
    }

    /// Send a request and return the status with the decoded JSON body
    /// (`Value::Null` when the body is empty)
    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&json).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::PUT, uri, Some(body)).await
    }

    pub async fn patch(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::PATCH, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, None).await
    }
}

/// Test application backed by a throwaway PostgreSQL container
pub struct PostgresTestApp {
    pub app: TestApp,
    pub pool: PgPool,
    _container: ContainerAsync<Postgres>,
}

impl PostgresTestApp {
    /// Start PostgreSQL, run migrations and wire the Postgres repositories
    pub async fn new() -> Self {
        let container = Postgres::default()
            .with_tag("16-alpine")
            .start()
            .await
            .expect("Failed to start PostgreSQL container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        let database_url = format!("postgres://postgres:postgres@{host}:{port}/postgres");

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .min_connections(1)
            .connect(&database_url)
            .await
            .expect("Failed to connect to test database");

        database::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        let api = ApiConfig::default();
        let state = AppState::new(
            Arc::new(PostgresUserRepository::new(pool.clone())),
            Arc::new(PostgresTaskRepository::new(pool.clone())),
            &api,
        );

        Self {
            app: TestApp {
                router: api_rest::router(state, &api.prefix),
            },
            pool,
            _container: container,
        }
    }
}

/// Extract the `id` field of a created resource
pub fn id_of(body: &Value) -> String {
    body["id"].as_str().expect("resource has a string id").to_string()
}

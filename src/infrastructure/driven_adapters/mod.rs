//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - Database repositories (PostgreSQL and in-memory)
//! - Configuration

pub mod config;
pub mod database;
pub mod task_repository;
pub mod user_repository;

pub use config::AppConfig;
pub use task_repository::{InMemoryTaskRepository, PostgresTaskRepository};
pub use user_repository::{InMemoryUserRepository, PostgresUserRepository};

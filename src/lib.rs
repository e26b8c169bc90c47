//! User & Task Registry API
//!
//! A Rust-based microservice exposing CRUD over users and tasks, following
//! Clean/Hexagonal Architecture principles.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;

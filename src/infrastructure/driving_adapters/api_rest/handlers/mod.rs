//! HTTP Handlers
//!
//! One router per resource; each handler performs exactly one use case call.

pub mod tasks;
pub mod users;

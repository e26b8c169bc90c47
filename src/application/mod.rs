//! Application Layer
//!
//! Contains one use case per HTTP operation.
//! Use cases depend on domain gateways (abstractions), not concrete implementations.

pub mod use_cases;

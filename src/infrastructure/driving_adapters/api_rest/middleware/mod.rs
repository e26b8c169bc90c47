//! API Middleware
//!
//! Request correlation for the REST API.

pub mod request_id;

pub use request_id::{make_request_span, REQUEST_ID_HEADER};

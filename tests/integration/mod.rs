//! Integration tests for taxi-service
//!
//! Every test builds the full router on a fresh in-memory database through
//! the `service!` macro.

pub mod auth_flow;
pub mod driver_test;
pub mod manufacturer_list;
pub mod security_headers_test;

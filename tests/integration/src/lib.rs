//! Integration test utilities for the CRM services
//!
//! End-to-end tests run the company service against PostgreSQL and, when
//! configured, the Redis audit queue.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;

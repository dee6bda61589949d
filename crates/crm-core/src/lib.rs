//! # crm-core
//!
//! Domain layer containing entities, value objects, repository traits, and audit events.
//! This crate has zero dependencies on infrastructure (database, queue transport, etc.).

pub mod entities;
pub mod error;
pub mod events;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Account, Company, User};
pub use error::DomainError;
pub use events::{AuditAction, AuditLogEntry};
pub use traits::{AccountRepository, AuditQueue, CompanyRepository, RepoResult, UserRepository};
pub use value_objects::{Snowflake, SnowflakeGenerator, SnowflakeParseError};

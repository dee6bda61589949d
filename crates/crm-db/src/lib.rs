//! # crm-db
//!
//! Database layer implementing the repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations
//!
//! The `companies` table is expected to carry a unique index on
//! `(account_id, name)`; `PgCompanyRepository::create` reports a violation of
//! it as `DomainError::CompanyNameTaken`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use crm_db::pool::{create_pool, DatabaseConfig};
//! use crm_db::repositories::PgCompanyRepository;
//! use crm_core::traits::CompanyRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     let companies = PgCompanyRepository::new(pool);
//!
//!     let existing = companies.find_by_name(account_id, "central perk").await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use repositories::{PgAccountRepository, PgCompanyRepository, PgUserRepository};

//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Account, Company, User};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Account Repository
// ============================================================================

#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Account>>;
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;
}

// ============================================================================
// Company Repository
// ============================================================================

#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// Find a company by ID within an account
    async fn find_by_id(&self, account_id: Snowflake, id: Snowflake) -> RepoResult<Option<Company>>;

    /// Find the company of an account whose name matches exactly
    async fn find_by_name(&self, account_id: Snowflake, name: &str) -> RepoResult<Option<Company>>;

    /// List the companies of an account ordered by name
    async fn list_by_account(&self, account_id: Snowflake) -> RepoResult<Vec<Company>>;

    /// Insert a new company
    ///
    /// Fails with [`DomainError::CompanyNameTaken`] when the store already
    /// holds a company with the same name for the account.
    async fn create(&self, company: &Company) -> RepoResult<()>;
}

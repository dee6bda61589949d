//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Account not found: {0}")]
    AccountNotFound(Snowflake),

    #[error("User not found: {0}")]
    UserNotFound(Snowflake),

    #[error("Company not found: {0}")]
    CompanyNotFound(Snowflake),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("User {author_id} does not belong to account {account_id}")]
    AuthorNotInAccount {
        author_id: Snowflake,
        account_id: Snowflake,
    },

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Company name already taken in account {account_id}: {name}")]
    CompanyNameTaken { account_id: Snowflake, name: String },

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Queue error: {0}")]
    QueueError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::AccountNotFound(_) => "UNKNOWN_ACCOUNT",
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::CompanyNotFound(_) => "UNKNOWN_COMPANY",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::AuthorNotInAccount { .. } => "AUTHOR_NOT_IN_ACCOUNT",
            Self::CompanyNameTaken { .. } => "COMPANY_NAME_TAKEN",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::QueueError(_) => "QUEUE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::AccountNotFound(_) | Self::UserNotFound(_) | Self::CompanyNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::AuthorNotInAccount { .. }
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::CompanyNameTaken { .. })
    }

    /// Check if this came from the storage layer
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::DatabaseError(_) | Self::CompanyNameTaken { .. })
    }
}

//! Request DTOs
//!
//! Each request DTO implements `Deserialize` and `Validate`; together they
//! form the input contract of a service operation.

use crm_core::Snowflake;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::services::{ServiceError, ServiceResult};

// ============================================================================
// Company Requests
// ============================================================================

/// Create company request
///
/// `account_id` and `author_id` are carried explicitly; there is no
/// ambient "current account".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CreateCompanyRequest {
    pub account_id: Snowflake,

    pub author_id: Snowflake,

    #[validate(
        length(min = 1, max = 255, message = "Company name must be 1-255 characters"),
        custom(function = "validate_not_blank")
    )]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 255, message = "Website must be at most 255 characters"))]
    pub website: Option<String>,

    #[serde(default)]
    #[validate(range(min = 0, message = "Number of employees cannot be negative"))]
    pub number_of_employees: Option<i32>,
}

impl CreateCompanyRequest {
    pub fn new(account_id: Snowflake, author_id: Snowflake, name: impl Into<String>) -> Self {
        Self {
            account_id,
            author_id,
            name: name.into(),
            website: None,
            number_of_employees: None,
        }
    }

    #[must_use]
    pub fn website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }

    #[must_use]
    pub fn number_of_employees(mut self, number_of_employees: i32) -> Self {
        self.number_of_employees = Some(number_of_employees);
        self
    }

    /// Parse and validate an untyped payload
    ///
    /// Missing or mistyped fields are reported as validation errors, the same
    /// as rule violations.
    pub fn from_json(payload: serde_json::Value) -> ServiceResult<Self> {
        let request: Self = serde_json::from_value(payload)
            .map_err(|e| ServiceError::validation(e.to_string()))?;
        request.validate()?;
        Ok(request)
    }
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("Company name cannot be blank".into()));
    }
    Ok(())
}

//! Company entity - an organisation tracked inside an account

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Company record
///
/// `name` is unique within `account_id`; the exact comparison (case,
/// collation) is whatever the backing store enforces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: Snowflake,
    pub account_id: Snowflake,
    pub name: String,
    pub website: Option<String>,
    pub number_of_employees: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Company {
    /// Create a new Company with no optional details
    pub fn new(id: Snowflake, account_id: Snowflake, name: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            account_id,
            name,
            website: None,
            number_of_employees: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_website(mut self, website: Option<String>) -> Self {
        self.website = website;
        self
    }

    pub fn with_number_of_employees(mut self, number_of_employees: Option<i32>) -> Self {
        self.number_of_employees = number_of_employees;
        self
    }

    /// Check if the company is owned by the given account
    #[inline]
    pub fn is_owned_by(&self, account_id: Snowflake) -> bool {
        self.account_id == account_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_creation() {
        let company = Company::new(
            Snowflake::new(5),
            Snowflake::new(1),
            "central perk".to_string(),
        )
        .with_website(Some("https://centralperk.com".to_string()))
        .with_number_of_employees(Some(3));

        assert_eq!(company.name, "central perk");
        assert_eq!(company.website.as_deref(), Some("https://centralperk.com"));
        assert_eq!(company.number_of_employees, Some(3));
        assert_eq!(company.created_at, company.updated_at);
        assert!(company.is_owned_by(Snowflake::new(1)));
        assert!(!company.is_owned_by(Snowflake::new(2)));
    }
}

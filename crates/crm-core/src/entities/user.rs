//! User entity - a member of exactly one account

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Account member; authors every audited mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Snowflake,
    pub account_id: Snowflake,
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(id: Snowflake, account_id: Snowflake, first_name: String, email: String) -> Self {
        Self {
            id,
            account_id,
            first_name,
            last_name: None,
            email,
            created_at: Utc::now(),
        }
    }

    /// Display name, as shown next to audit entries
    pub fn name(&self) -> String {
        match self.last_name.as_deref().map(str::trim) {
            Some(last) if !last.is_empty() => format!("{} {}", self.first_name, last),
            _ => self.first_name.clone(),
        }
    }

    /// Check whether the user belongs to the given account
    #[inline]
    pub fn belongs_to(&self, account_id: Snowflake) -> bool {
        self.account_id == account_id
    }
}

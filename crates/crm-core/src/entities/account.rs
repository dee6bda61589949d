//! Account entity - the tenant boundary

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Tenant that owns users and companies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: Snowflake,
    pub created_at: DateTime<Utc>,
}

impl Account {
    pub fn new(id: Snowflake) -> Self {
        Self {
            id,
            created_at: Utc::now(),
        }
    }
}

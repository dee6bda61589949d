//! Response DTOs
//!
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Company as returned to callers
#[derive(Debug, Clone, Serialize)]
pub struct CompanyResponse {
    pub id: String,
    pub account_id: String,
    pub name: String,
    pub website: Option<String>,
    pub number_of_employees: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

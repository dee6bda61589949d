//! Company database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for companies table
#[derive(Debug, Clone, FromRow)]
pub struct CompanyModel {
    pub id: i64,
    pub account_id: i64,
    pub name: String,
    pub website: Option<String>,
    pub number_of_employees: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

//! Company entity <-> model mapper

use chrono::{DateTime, Utc};
use crm_core::entities::Company;
use crm_core::value_objects::Snowflake;

use crate::models::CompanyModel;

/// Convert CompanyModel to Company entity
impl From<CompanyModel> for Company {
    fn from(model: CompanyModel) -> Self {
        Company {
            id: Snowflake::new(model.id),
            account_id: Snowflake::new(model.account_id),
            name: model.name,
            website: model.website,
            number_of_employees: model.number_of_employees,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Borrowed column values for inserting a company
pub struct CompanyInsert<'a> {
    pub id: i64,
    pub account_id: i64,
    pub name: &'a str,
    pub website: Option<&'a str>,
    pub number_of_employees: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl<'a> CompanyInsert<'a> {
    pub fn new(company: &'a Company) -> Self {
        Self {
            id: company.id.into_inner(),
            account_id: company.account_id.into_inner(),
            name: &company.name,
            website: company.website.as_deref(),
            number_of_employees: company.number_of_employees,
            created_at: company.created_at,
            updated_at: company.updated_at,
        }
    }
}

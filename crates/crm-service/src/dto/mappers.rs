//! Entity to DTO conversions

use crm_core::entities::Company;

use super::responses::CompanyResponse;

impl From<&Company> for CompanyResponse {
    fn from(company: &Company) -> Self {
        Self {
            id: company.id.to_string(),
            account_id: company.account_id.to_string(),
            name: company.name.clone(),
            website: company.website.clone(),
            number_of_employees: company.number_of_employees,
            created_at: company.created_at,
            updated_at: company.updated_at,
        }
    }
}

impl From<Company> for CompanyResponse {
    fn from(company: Company) -> Self {
        Self::from(&company)
    }
}

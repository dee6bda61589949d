//! Data transfer objects
//!
//! - Request DTOs carrying the validation contract for service inputs
//! - Response DTOs for serializing service outputs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::CreateCompanyRequest;
pub use responses::CompanyResponse;

//! # crm-service
//!
//! Application layer containing the company services, audit notification, and DTOs.

pub mod dto;
pub mod services;

pub use dto::{CompanyResponse, CreateCompanyRequest};
pub use services::{
    AuditNotifier, CompanyService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult,
};

//! Business logic services
//!
//! Service layer implementations that handle validation and orchestration
//! of domain operations.

pub mod audit;
pub mod company;
pub mod context;
pub mod error;

pub use audit::AuditNotifier;
pub use company::CompanyService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};

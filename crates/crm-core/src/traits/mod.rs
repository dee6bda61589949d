//! Ports implemented by the infrastructure crates

mod audit_queue;
mod repositories;

pub use audit_queue::AuditQueue;
pub use repositories::{AccountRepository, CompanyRepository, RepoResult, UserRepository};

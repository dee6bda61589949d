//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in crm-core.

mod account;
mod company;
mod error;
mod user;

pub use account::PgAccountRepository;
pub use company::PgCompanyRepository;
pub use user::PgUserRepository;

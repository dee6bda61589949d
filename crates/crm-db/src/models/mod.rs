//! Database models - rows as they come out of PostgreSQL

mod account;
mod company;
mod user;

pub use account::AccountModel;
pub use company::CompanyModel;
pub use user::UserModel;

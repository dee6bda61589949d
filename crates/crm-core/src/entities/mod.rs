//! Domain entities - core business objects

mod account;
mod company;
mod user;

pub use account::Account;
pub use company::Company;
pub use user::User;

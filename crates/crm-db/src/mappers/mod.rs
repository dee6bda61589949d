//! Entity <-> model mappers

mod account;
mod company;
mod user;

pub use company::CompanyInsert;

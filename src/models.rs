pub mod auth;
pub mod catalog;
pub mod client;
pub mod custom_field;
pub mod dashboard;
pub mod finance;
pub mod order;
pub mod profile;
pub mod receipt;

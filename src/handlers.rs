pub mod auth;
pub mod catalog;
pub mod clients;
pub mod custom_fields;
pub mod dashboard;
pub mod orders;
pub mod profile;
pub mod transactions;

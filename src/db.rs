pub mod catalog_repo;
pub mod client_repo;
pub mod custom_field_repo;
pub mod dashboard_repo;
pub mod order_repo;
pub mod profile_repo;
pub mod transaction_repo;
pub mod user_repo;

pub use catalog_repo::CatalogRepository;
pub use client_repo::ClientRepository;
pub use custom_field_repo::CustomFieldRepository;
pub use dashboard_repo::DashboardRepository;
pub use order_repo::OrderRepository;
pub use profile_repo::ProfileRepository;
pub use transaction_repo::TransactionRepository;
pub use user_repo::UserRepository;

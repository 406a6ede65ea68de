pub mod auth_service;
pub mod catalog_service;
pub mod client_service;
pub mod custom_field_service;
pub mod dashboard_service;
pub mod finance_service;
pub mod order_service;
pub mod profile_service;
pub mod receipt_service;

pub use auth_service::AuthService;
pub use catalog_service::CatalogService;
pub use client_service::ClientService;
pub use custom_field_service::CustomFieldService;
pub use dashboard_service::DashboardService;
pub use finance_service::FinanceService;
pub use order_service::OrderService;
pub use profile_service::ProfileService;
pub use receipt_service::ReceiptService;

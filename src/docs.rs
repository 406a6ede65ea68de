// src/docs.rs

use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::register,
        handlers::auth::login,
        handlers::auth::get_me,

        // --- Clients ---
        handlers::clients::list_clients,
        handlers::clients::get_client,
        handlers::clients::create_client,
        handlers::clients::update_client,
        handlers::clients::delete_client,

        // --- Catalog ---
        handlers::catalog::list_services,
        handlers::catalog::get_service,
        handlers::catalog::create_service,
        handlers::catalog::update_service,
        handlers::catalog::delete_service,

        // --- Orders ---
        handlers::orders::list_orders,
        handlers::orders::get_order,
        handlers::orders::create_order,
        handlers::orders::update_order,
        handlers::orders::add_order_item,
        handlers::orders::change_order_item,
        handlers::orders::get_order_receipt,
        handlers::orders::delete_order,

        // --- Finance ---
        handlers::transactions::list_transactions,
        handlers::transactions::get_finance_summary,
        handlers::transactions::create_transaction,
        handlers::transactions::delete_transaction,

        // --- Custom Fields ---
        handlers::custom_fields::list_field_definitions,
        handlers::custom_fields::create_field_definition,
        handlers::custom_fields::delete_field_definition,

        // --- Profile ---
        handlers::profile::get_profile,
        handlers::profile::update_profile,

        // --- Dashboard ---
        handlers::dashboard::get_summary,
    ),
    components(
        schemas(
            // --- Auth ---
            models::auth::User,
            models::auth::RegisterUserPayload,
            models::auth::LoginUserPayload,
            models::auth::AuthResponse,

            // --- Clients ---
            models::client::Client,
            models::client::Address,
            models::client::AddressInput,
            handlers::clients::CreateClientPayload,
            handlers::clients::UpdateClientPayload,

            // --- Catalog ---
            models::catalog::Service,
            handlers::catalog::CreateServicePayload,
            handlers::catalog::UpdateServicePayload,

            // --- Orders ---
            models::order::OrderStatus,
            models::order::OrderPriority,
            models::order::ServiceItem,
            models::order::ServiceOrder,
            handlers::orders::CreateOrderPayload,
            handlers::orders::UpdateOrderPayload,
            handlers::orders::AddOrderItemPayload,
            handlers::orders::ChangeItemQuantityPayload,

            // --- Finance ---
            models::finance::TransactionKind,
            models::finance::Transaction,
            models::finance::FinanceSummary,
            handlers::transactions::CreateTransactionPayload,

            // --- Custom Fields ---
            models::custom_field::EntityKind,
            models::custom_field::FieldKind,
            models::custom_field::FieldDefinition,
            models::custom_field::FieldValue,
            handlers::custom_fields::CreateFieldPayload,

            // --- Profile ---
            models::profile::Profile,
            handlers::profile::UpdateProfilePayload,

            // --- Dashboard ---
            models::dashboard::DashboardSummary,

            // --- Receipt ---
            models::receipt::ReceiptView,
            models::receipt::ReceiptLine,
        )
    ),
    tags(
        (name = "Auth", description = "Autenticação e Registro"),
        (name = "Clients", description = "Gestão de Clientes e Endereços"),
        (name = "Catalog", description = "Catálogo de Serviços"),
        (name = "Orders", description = "Ordens de Serviço e Recibos"),
        (name = "Finance", description = "Pagamentos e Totais Financeiros"),
        (name = "Custom Fields", description = "Campos Personalizados por Entidade"),
        (name = "Profile", description = "Perfil do Negócio"),
        (name = "Dashboard", description = "Indicadores da Tela Inicial")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}

//src/main.rs

use axum::{
    middleware as axum_middleware,
    routing::{delete, get, post},
    Router,
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod middleware;
mod models;
mod services;

use crate::config::AppState;
use crate::middleware::auth::auth_middleware;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_target(false).compact().init();

    // Se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    // Rotas públicas de autenticação
    let auth_routes = Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login));

    let user_routes = Router::new().route("/me", get(handlers::auth::get_me));

    let client_routes = Router::new()
        .route(
            "/",
            post(handlers::clients::create_client).get(handlers::clients::list_clients),
        )
        .route(
            "/{id}",
            get(handlers::clients::get_client)
                .put(handlers::clients::update_client)
                .delete(handlers::clients::delete_client),
        );

    let catalog_routes = Router::new()
        .route(
            "/",
            post(handlers::catalog::create_service).get(handlers::catalog::list_services),
        )
        .route(
            "/{id}",
            get(handlers::catalog::get_service)
                .put(handlers::catalog::update_service)
                .delete(handlers::catalog::delete_service),
        );

    let order_routes = Router::new()
        .route(
            "/",
            post(handlers::orders::create_order).get(handlers::orders::list_orders),
        )
        .route(
            "/{id}",
            get(handlers::orders::get_order)
                .put(handlers::orders::update_order)
                .delete(handlers::orders::delete_order),
        )
        .route(
            "/{id}/items",
            post(handlers::orders::add_order_item)
                .patch(handlers::orders::change_order_item),
        )
        .route("/{id}/receipt", get(handlers::orders::get_order_receipt));

    let transaction_routes = Router::new()
        .route(
            "/",
            post(handlers::transactions::create_transaction)
                .get(handlers::transactions::list_transactions),
        )
        .route("/summary", get(handlers::transactions::get_finance_summary))
        .route("/{id}", delete(handlers::transactions::delete_transaction));

    let custom_field_routes = Router::new()
        .route(
            "/",
            post(handlers::custom_fields::create_field_definition)
                .get(handlers::custom_fields::list_field_definitions),
        )
        .route(
            "/{id}",
            delete(handlers::custom_fields::delete_field_definition),
        );

    let profile_routes = Router::new().route(
        "/",
        get(handlers::profile::get_profile).put(handlers::profile::update_profile),
    );

    let dashboard_routes =
        Router::new().route("/summary", get(handlers::dashboard::get_summary));

    // Tudo que toca dados da conta passa pelo guard de autenticação.
    let protected_routes = Router::new()
        .nest("/users", user_routes)
        .nest("/clients", client_routes)
        .nest("/services", catalog_routes)
        .nest("/orders", order_routes)
        .nest("/transactions", transaction_routes)
        .nest("/custom-fields", custom_field_routes)
        .nest("/profile", profile_routes)
        .nest("/dashboard", dashboard_routes)
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_middleware,
        ));

    let app = Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", docs::ApiDoc::openapi()))
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/auth", auth_routes)
        .nest("/api", protected_routes)
        .with_state(app_state);

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", addr);
    axum::serve(listener, app)
        .await
        .expect("Erro no servidor Axum");
}

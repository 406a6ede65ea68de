// src/config.rs

use sqlx::{postgres::PgPoolOptions, PgPool};
use std::{env, time::Duration};

use crate::{
    db::{
        CatalogRepository, ClientRepository, CustomFieldRepository, DashboardRepository,
        OrderRepository, ProfileRepository, TransactionRepository, UserRepository,
    },
    services::{
        AuthService, CatalogService, ClientService, CustomFieldService, DashboardService,
        FinanceService, OrderService, ProfileService, ReceiptService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub auth_service: AuthService,
    pub client_service: ClientService,
    pub catalog_service: CatalogService,
    pub order_service: OrderService,
    pub finance_service: FinanceService,
    pub custom_field_service: CustomFieldService,
    pub profile_service: ProfileService,
    pub receipt_service: ReceiptService,
    pub dashboard_service: DashboardService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL deve ser definida"))?;
        let jwt_secret = env::var("JWT_SECRET")
            .map_err(|_| anyhow::anyhow!("JWT_SECRET deve ser definido"))?;

        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        // --- Monta o gráfico de dependências ---
        let user_repo = UserRepository::new(db_pool.clone());
        let client_repo = ClientRepository::new(db_pool.clone());
        let catalog_repo = CatalogRepository::new(db_pool.clone());
        let order_repo = OrderRepository::new(db_pool.clone());
        let transaction_repo = TransactionRepository::new(db_pool.clone());
        let custom_field_repo = CustomFieldRepository::new(db_pool.clone());
        let profile_repo = ProfileRepository::new(db_pool.clone());
        let dashboard_repo = DashboardRepository::new(db_pool.clone());

        let auth_service = AuthService::new(
            user_repo,
            profile_repo.clone(),
            jwt_secret,
            db_pool.clone(),
        );
        let client_service = ClientService::new(
            client_repo,
            custom_field_repo.clone(),
            db_pool.clone(),
        );
        let catalog_service = CatalogService::new(
            catalog_repo.clone(),
            custom_field_repo.clone(),
            db_pool.clone(),
        );
        let order_service = OrderService::new(
            order_repo.clone(),
            catalog_repo,
            custom_field_repo.clone(),
            db_pool.clone(),
        );
        let finance_service = FinanceService::new(transaction_repo, order_repo.clone());
        let custom_field_service = CustomFieldService::new(custom_field_repo);
        let profile_service = ProfileService::new(profile_repo.clone());
        let receipt_service = ReceiptService::new(order_repo, profile_repo);
        let dashboard_service = DashboardService::new(dashboard_repo);

        Ok(Self {
            db_pool,
            auth_service,
            client_service,
            catalog_service,
            order_service,
            finance_service,
            custom_field_service,
            profile_service,
            receipt_service,
            dashboard_service,
        })
    }
}

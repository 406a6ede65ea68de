// src/models/dashboard.rs

use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

// Agregados da tela inicial, calculados no banco.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    #[schema(example = 12)]
    pub clients: i64,
    #[schema(example = 4)]
    pub open_orders: i64,
    #[schema(example = 35)]
    pub finished_orders: i64,
    #[schema(example = "4200.00")]
    pub received: Decimal,
    #[schema(example = "750.00")]
    pub pending: Decimal,
}

// src/models/catalog.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// Um serviço do catálogo. Identidade imutável, preço/descrição mutáveis.
// Pedidos existentes nunca são afetados por mudanças de preço: o item do
// pedido guarda uma cópia de nome/preço no momento da venda.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: Uuid,
    #[schema(ignore)]
    pub user_id: Uuid,

    #[schema(example = "Troca de óleo")]
    pub name: String,
    pub description: Option<String>,

    #[schema(example = "120.00")]
    pub price: Decimal,

    pub active: bool,

    pub image_url: Option<String>,

    #[schema(example = json!({}))]
    pub custom_fields: Value,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// src/models/order.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// --- Enums ---

// Rótulo livre: qualquer status pode ser definido a partir de qualquer outro
// pelo formulário de edição (não há grafo de transições).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "order_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Start,
    Progress,
    Waiting,
    Cancelled,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "order_priority", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OrderPriority {
    Low,
    Normal,
    High,
}

// --- Structs ---

// Linha do pedido: cópia pontual de nome/preço do serviço, não uma referência.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceItem {
    #[schema(example = "Troca de óleo")]
    pub name: String,
    #[schema(example = "120.00")]
    pub price: Decimal,
    #[schema(example = 2)]
    pub quantity: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOrder {
    pub id: Uuid,
    #[schema(ignore)]
    pub user_id: Uuid,

    pub client_id: Option<Uuid>,

    // Desnormalizado na leitura via JOIN com clients; cai para
    // "Cliente Desconhecido" quando a resolução falha.
    #[schema(example = "Maria Silva")]
    pub client_name: String,

    pub status: OrderStatus,
    pub priority: OrderPriority,

    // Invariante: total = max(0, soma(preço * quantidade) - desconto).
    #[schema(example = "220.00")]
    pub total: Decimal,
    #[schema(example = "30.00")]
    pub discount: Decimal,

    pub description: Option<String>,
    pub scheduled_at: Option<DateTime<Utc>>,
    #[schema(example = "OS-0042")]
    pub number: Option<String>,
    pub image_url: Option<String>,

    #[schema(example = json!({}))]
    pub custom_fields: Value,

    // Carregado pelo repositório num segundo passo.
    #[sqlx(skip)]
    pub services: Vec<ServiceItem>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

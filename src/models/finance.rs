// src/models/finance.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// --- Enums ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "transaction_kind", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Received, // Recebido
    Pending,  // Pendente
}

// --- Structs ---

// Um pagamento vinculado a um pedido. Ciclo de vida independente:
// continua existindo mesmo que o pedido suma do fluxo visível.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: Uuid,
    #[schema(ignore)]
    pub user_id: Uuid,

    pub order_id: Option<Uuid>,

    // Derivado transitivamente na leitura: transação -> pedido -> cliente.
    #[schema(example = "Maria Silva")]
    pub client_name: String,

    #[schema(example = "180.00")]
    pub amount: Decimal,

    #[schema(value_type = String, format = Date, example = "2025-01-03")]
    pub date: NaiveDate,

    pub kind: TransactionKind,

    pub created_at: DateTime<Utc>,
}

// Totais da página financeira.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FinanceSummary {
    #[schema(example = "1170.00")]
    pub total: Decimal,
    #[schema(example = "420.00")]
    pub received: Decimal,
    #[schema(example = "750.00")]
    pub pending: Decimal,
}

// src/db/transaction_repo.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::finance::{FinanceSummary, Transaction, TransactionKind},
};

// O client_name é derivado transitivamente na leitura:
// transação -> pedido -> cliente. Nada é gravado em dobro.
const TRANSACTION_SELECT: &str = r#"
    SELECT t.*, COALESCE(c.name, 'Cliente Desconhecido') AS client_name
    FROM transactions t
    LEFT JOIN service_orders o ON o.id = t.order_id
    LEFT JOIN clients c ON c.id = o.client_id
"#;

#[derive(Clone)]
pub struct TransactionRepository {
    pool: PgPool,
}

impl TransactionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, user_id: Uuid) -> Result<Vec<Transaction>, AppError> {
        let transactions = sqlx::query_as::<_, Transaction>(&format!(
            "{TRANSACTION_SELECT} WHERE t.user_id = $1 ORDER BY t.created_at DESC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(transactions)
    }

    pub async fn find(&self, user_id: Uuid, id: Uuid) -> Result<Option<Transaction>, AppError> {
        let transaction = sqlx::query_as::<_, Transaction>(&format!(
            "{TRANSACTION_SELECT} WHERE t.user_id = $1 AND t.id = $2"
        ))
        .bind(user_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(transaction)
    }

    pub async fn insert(
        &self,
        user_id: Uuid,
        order_id: Option<Uuid>,
        amount: Decimal,
        date: NaiveDate,
        kind: TransactionKind,
    ) -> Result<Uuid, AppError> {
        let (id,): (Uuid,) = sqlx::query_as(
            r#"
            INSERT INTO transactions (user_id, order_id, amount, date, kind)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(user_id)
        .bind(order_id)
        .bind(amount)
        .bind(date)
        .bind(kind)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    pub async fn delete(&self, user_id: Uuid, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM transactions WHERE user_id = $1 AND id = $2")
            .bind(user_id)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Totais da página financeira em uma única query.
    pub async fn summary(&self, user_id: Uuid) -> Result<FinanceSummary, AppError> {
        let summary = sqlx::query_as::<_, FinanceSummary>(
            r#"
            SELECT
                COALESCE(SUM(amount), 0) AS total,
                COALESCE(SUM(amount) FILTER (WHERE kind = 'received'), 0) AS received,
                COALESCE(SUM(amount) FILTER (WHERE kind = 'pending'), 0) AS pending
            FROM transactions
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(summary)
    }
}

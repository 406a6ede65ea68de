// src/services/finance_service.rs

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{OrderRepository, TransactionRepository},
    models::finance::{FinanceSummary, Transaction, TransactionKind},
};

#[derive(Clone)]
pub struct FinanceService {
    repo: TransactionRepository,
    order_repo: OrderRepository,
}

impl FinanceService {
    pub fn new(repo: TransactionRepository, order_repo: OrderRepository) -> Self {
        Self { repo, order_repo }
    }

    pub async fn list(&self, user_id: Uuid) -> Result<Vec<Transaction>, AppError> {
        self.repo.list(user_id).await
    }

    pub async fn summary(&self, user_id: Uuid) -> Result<FinanceSummary, AppError> {
        self.repo.summary(user_id).await
    }

    /// Data omitida assume o dia corrente. O vínculo com o pedido é opcional,
    /// mas quando informado precisa apontar para um pedido da própria conta.
    pub async fn create(
        &self,
        user_id: Uuid,
        order_id: Option<Uuid>,
        amount: Decimal,
        date: Option<NaiveDate>,
        kind: TransactionKind,
    ) -> Result<Transaction, AppError> {
        if let Some(order_id) = order_id {
            self.order_repo
                .find(user_id, order_id)
                .await?
                .ok_or(AppError::NotFound("Ordem de serviço"))?;
        }

        let date = date.unwrap_or_else(|| Utc::now().date_naive());

        let id = self.repo.insert(user_id, order_id, amount, date, kind).await?;

        self.repo
            .find(user_id, id)
            .await?
            .ok_or(AppError::NotFound("Transação"))
    }

    pub async fn delete(&self, user_id: Uuid, id: Uuid) -> Result<(), AppError> {
        let deleted = self.repo.delete(user_id, id).await?;
        if deleted == 0 {
            return Err(AppError::NotFound("Transação"));
        }
        Ok(())
    }
}

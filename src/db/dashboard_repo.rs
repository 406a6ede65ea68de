// src/db/dashboard_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{common::error::AppError, models::dashboard::DashboardSummary};

#[derive(Clone)]
pub struct DashboardRepository {
    pool: PgPool,
}

impl DashboardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Agregados da tela inicial em uma única ida ao banco.
    pub async fn summary(&self, user_id: Uuid) -> Result<DashboardSummary, AppError> {
        let summary = sqlx::query_as::<_, DashboardSummary>(
            r#"
            SELECT
                (SELECT COUNT(*) FROM clients WHERE user_id = $1) AS clients,
                (SELECT COUNT(*) FROM service_orders
                  WHERE user_id = $1 AND status NOT IN ('finished', 'cancelled')) AS open_orders,
                (SELECT COUNT(*) FROM service_orders
                  WHERE user_id = $1 AND status = 'finished') AS finished_orders,
                (SELECT COALESCE(SUM(amount), 0) FROM transactions
                  WHERE user_id = $1 AND kind = 'received') AS received,
                (SELECT COALESCE(SUM(amount), 0) FROM transactions
                  WHERE user_id = $1 AND kind = 'pending') AS pending
            "#,
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(summary)
    }
}

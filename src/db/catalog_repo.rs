// src/db/catalog_repo.rs

use rust_decimal::Decimal;
use serde_json::Value;
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{common::error::AppError, models::catalog::Service};

#[derive(Clone)]
pub struct CatalogRepository {
    pool: PgPool,
}

impl CatalogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, user_id: Uuid) -> Result<Vec<Service>, AppError> {
        let services = sqlx::query_as::<_, Service>(
            "SELECT * FROM services WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(services)
    }

    pub async fn find(&self, user_id: Uuid, id: Uuid) -> Result<Option<Service>, AppError> {
        let service = sqlx::query_as::<_, Service>(
            "SELECT * FROM services WHERE user_id = $1 AND id = $2",
        )
        .bind(user_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(service)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn insert<'e, E>(
        &self,
        executor: E,
        user_id: Uuid,
        name: &str,
        description: Option<&str>,
        price: Decimal,
        active: bool,
        image_url: Option<&str>,
        custom_fields: &Value,
    ) -> Result<Service, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let service = sqlx::query_as::<_, Service>(
            r#"
            INSERT INTO services (
                user_id, name, description, price, active, image_url, custom_fields
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(name)
        .bind(description)
        .bind(price)
        .bind(active)
        .bind(image_url)
        .bind(custom_fields)
        .fetch_one(executor)
        .await?;

        Ok(service)
    }

    // Mudar o preço aqui nunca altera pedidos existentes: os itens do pedido
    // guardam uma cópia do preço no momento da venda.
    #[allow(clippy::too_many_arguments)]
    pub async fn update<'e, E>(
        &self,
        executor: E,
        user_id: Uuid,
        id: Uuid,
        name: Option<&str>,
        description: Option<&str>,
        price: Option<Decimal>,
        active: Option<bool>,
        image_url: Option<&str>,
        custom_fields: Option<&Value>,
    ) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query(
            r#"
            UPDATE services SET
                name          = COALESCE($3, name),
                description   = COALESCE($4, description),
                price         = COALESCE($5, price),
                active        = COALESCE($6, active),
                image_url     = COALESCE($7, image_url),
                custom_fields = COALESCE($8, custom_fields),
                updated_at    = NOW()
            WHERE user_id = $1 AND id = $2
            "#,
        )
        .bind(user_id)
        .bind(id)
        .bind(name)
        .bind(description)
        .bind(price)
        .bind(active)
        .bind(image_url)
        .bind(custom_fields)
        .execute(executor)
        .await?;

        Ok(result.rows_affected())
    }

    pub async fn delete(&self, user_id: Uuid, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM services WHERE user_id = $1 AND id = $2")
            .bind(user_id)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

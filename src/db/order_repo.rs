// src/db/order_repo.rs

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde_json::Value;
use sqlx::{Executor, FromRow, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::order::{OrderPriority, OrderStatus, ServiceItem, ServiceOrder},
};

// SELECT compartilhado: o client_name é desnormalizado na leitura,
// com fallback quando o cliente já não existe.
const ORDER_SELECT: &str = r#"
    SELECT o.*, COALESCE(c.name, 'Cliente Desconhecido') AS client_name
    FROM service_orders o
    LEFT JOIN clients c ON c.id = o.client_id
"#;

#[derive(Debug, FromRow)]
struct ItemRow {
    order_id: Uuid,
    name: String,
    price: Decimal,
    quantity: i32,
}

#[derive(Clone)]
pub struct OrderRepository {
    pool: PgPool,
}

impl OrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, user_id: Uuid) -> Result<Vec<ServiceOrder>, AppError> {
        let mut orders = sqlx::query_as::<_, ServiceOrder>(&format!(
            "{ORDER_SELECT} WHERE o.user_id = $1 ORDER BY o.created_at DESC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        let items = sqlx::query_as::<_, ItemRow>(
            r#"
            SELECT i.order_id, i.name, i.price, i.quantity
            FROM order_items i
            JOIN service_orders o ON o.id = i.order_id
            WHERE o.user_id = $1
            ORDER BY i.created_at ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        let mut grouped: HashMap<Uuid, Vec<ServiceItem>> = HashMap::new();
        for row in items {
            grouped.entry(row.order_id).or_default().push(ServiceItem {
                name: row.name,
                price: row.price,
                quantity: row.quantity,
            });
        }
        for order in &mut orders {
            order.services = grouped.remove(&order.id).unwrap_or_default();
        }

        Ok(orders)
    }

    pub async fn find(&self, user_id: Uuid, id: Uuid) -> Result<Option<ServiceOrder>, AppError> {
        let order = sqlx::query_as::<_, ServiceOrder>(&format!(
            "{ORDER_SELECT} WHERE o.user_id = $1 AND o.id = $2"
        ))
        .bind(user_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(mut order) = order else {
            return Ok(None);
        };

        order.services = self.list_items(&self.pool, order.id).await?;

        Ok(Some(order))
    }

    pub async fn list_items<'e, E>(
        &self,
        executor: E,
        order_id: Uuid,
    ) -> Result<Vec<ServiceItem>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let items = sqlx::query_as::<_, ServiceItem>(
            r#"
            SELECT name, price, quantity FROM order_items
            WHERE order_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(order_id)
        .fetch_all(executor)
        .await?;

        Ok(items)
    }

    /// Insere só o cabeçalho; os itens entram em seguida na mesma transação.
    #[allow(clippy::too_many_arguments)]
    pub async fn insert_order<'e, E>(
        &self,
        executor: E,
        user_id: Uuid,
        client_id: Option<Uuid>,
        status: OrderStatus,
        priority: OrderPriority,
        total: Decimal,
        discount: Decimal,
        description: Option<&str>,
        scheduled_at: Option<DateTime<Utc>>,
        number: Option<&str>,
        image_url: Option<&str>,
        custom_fields: &Value,
    ) -> Result<Uuid, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let (id,): (Uuid,) = sqlx::query_as(
            r#"
            INSERT INTO service_orders (
                user_id, client_id, status, priority, total, discount,
                description, scheduled_at, number, image_url, custom_fields
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id
            "#,
        )
        .bind(user_id)
        .bind(client_id)
        .bind(status)
        .bind(priority)
        .bind(total)
        .bind(discount)
        .bind(description)
        .bind(scheduled_at)
        .bind(number)
        .bind(image_url)
        .bind(custom_fields)
        .fetch_one(executor)
        .await?;

        Ok(id)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update_order<'e, E>(
        &self,
        executor: E,
        user_id: Uuid,
        id: Uuid,
        client_id: Option<Uuid>,
        status: Option<OrderStatus>,
        priority: Option<OrderPriority>,
        total: Option<Decimal>,
        discount: Option<Decimal>,
        description: Option<&str>,
        scheduled_at: Option<DateTime<Utc>>,
        number: Option<&str>,
        image_url: Option<&str>,
        custom_fields: Option<&Value>,
    ) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query(
            r#"
            UPDATE service_orders SET
                client_id     = COALESCE($3, client_id),
                status        = COALESCE($4, status),
                priority      = COALESCE($5, priority),
                total         = COALESCE($6, total),
                discount      = COALESCE($7, discount),
                description   = COALESCE($8, description),
                scheduled_at  = COALESCE($9, scheduled_at),
                number        = COALESCE($10, number),
                image_url     = COALESCE($11, image_url),
                custom_fields = COALESCE($12, custom_fields),
                updated_at    = NOW()
            WHERE user_id = $1 AND id = $2
            "#,
        )
        .bind(user_id)
        .bind(id)
        .bind(client_id)
        .bind(status)
        .bind(priority)
        .bind(total)
        .bind(discount)
        .bind(description)
        .bind(scheduled_at)
        .bind(number)
        .bind(image_url)
        .bind(custom_fields)
        .execute(executor)
        .await?;

        Ok(result.rows_affected())
    }

    /// Troca de itens é sempre delete-all-then-insert, nunca um diff.
    pub async fn delete_items<'e, E>(&self, executor: E, order_id: Uuid) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM order_items WHERE order_id = $1")
            .bind(order_id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }

    pub async fn insert_item<'e, E>(
        &self,
        executor: E,
        order_id: Uuid,
        item: &ServiceItem,
    ) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query(
            "INSERT INTO order_items (order_id, name, price, quantity) VALUES ($1, $2, $3, $4)",
        )
        .bind(order_id)
        .bind(&item.name)
        .bind(item.price)
        .bind(item.quantity)
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn delete(&self, user_id: Uuid, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM service_orders WHERE user_id = $1 AND id = $2")
            .bind(user_id)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

// src/db/client_repo.rs

use std::collections::HashMap;

use chrono::NaiveDate;
use serde_json::Value;
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::client::{Address, AddressInput, Client},
};

#[derive(Clone)]
pub struct ClientRepository {
    pool: PgPool,
}

impl ClientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lista os clientes da conta, mais recentes primeiro, já com os endereços.
    pub async fn list(&self, user_id: Uuid) -> Result<Vec<Client>, AppError> {
        let mut clients = sqlx::query_as::<_, Client>(
            "SELECT * FROM clients WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        // Um único SELECT para os endereços de todos os clientes da conta.
        let addresses = sqlx::query_as::<_, Address>(
            r#"
            SELECT a.* FROM client_addresses a
            JOIN clients c ON c.id = a.client_id
            WHERE c.user_id = $1
            ORDER BY a.created_at ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        let mut grouped: HashMap<Uuid, Vec<Address>> = HashMap::new();
        for address in addresses {
            grouped.entry(address.client_id).or_default().push(address);
        }
        for client in &mut clients {
            client.addresses = grouped.remove(&client.id).unwrap_or_default();
        }

        Ok(clients)
    }

    pub async fn find(&self, user_id: Uuid, id: Uuid) -> Result<Option<Client>, AppError> {
        let client = sqlx::query_as::<_, Client>(
            "SELECT * FROM clients WHERE user_id = $1 AND id = $2",
        )
        .bind(user_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(mut client) = client else {
            return Ok(None);
        };

        client.addresses = sqlx::query_as::<_, Address>(
            "SELECT * FROM client_addresses WHERE client_id = $1 ORDER BY created_at ASC",
        )
        .bind(client.id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(client))
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn insert_client<'e, E>(
        &self,
        executor: E,
        user_id: Uuid,
        name: &str,
        email: &str,
        phone: &str,
        document: &str,
        birth_date: Option<NaiveDate>,
        avatar_url: Option<&str>,
        custom_fields: &Value,
    ) -> Result<Client, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let client = sqlx::query_as::<_, Client>(
            r#"
            INSERT INTO clients (
                user_id, name, email, phone, document, birth_date, avatar_url, custom_fields
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(name)
        .bind(email)
        .bind(phone)
        .bind(document)
        .bind(birth_date)
        .bind(avatar_url)
        .bind(custom_fields)
        .fetch_one(executor)
        .await?;

        Ok(client)
    }

    /// Atualização parcial: campos omitidos no payload ficam como estão.
    #[allow(clippy::too_many_arguments)]
    pub async fn update_client<'e, E>(
        &self,
        executor: E,
        user_id: Uuid,
        id: Uuid,
        name: Option<&str>,
        email: Option<&str>,
        phone: Option<&str>,
        document: Option<&str>,
        birth_date: Option<NaiveDate>,
        avatar_url: Option<&str>,
        custom_fields: Option<&Value>,
    ) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query(
            r#"
            UPDATE clients SET
                name          = COALESCE($3, name),
                email         = COALESCE($4, email),
                phone         = COALESCE($5, phone),
                document      = COALESCE($6, document),
                birth_date    = COALESCE($7, birth_date),
                avatar_url    = COALESCE($8, avatar_url),
                custom_fields = COALESCE($9, custom_fields),
                updated_at    = NOW()
            WHERE user_id = $1 AND id = $2
            "#,
        )
        .bind(user_id)
        .bind(id)
        .bind(name)
        .bind(email)
        .bind(phone)
        .bind(document)
        .bind(birth_date)
        .bind(avatar_url)
        .bind(custom_fields)
        .execute(executor)
        .await?;

        Ok(result.rows_affected())
    }

    /// Estratégia replace-all: o conjunto antigo é apagado por inteiro
    /// antes de inserir o novo.
    pub async fn delete_addresses<'e, E>(
        &self,
        executor: E,
        client_id: Uuid,
    ) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM client_addresses WHERE client_id = $1")
            .bind(client_id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }

    pub async fn insert_address<'e, E>(
        &self,
        executor: E,
        client_id: Uuid,
        address: &AddressInput,
    ) -> Result<Address, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let inserted = sqlx::query_as::<_, Address>(
            r#"
            INSERT INTO client_addresses (
                client_id, label, cep, street, number, complement,
                neighborhood, city, state, is_default
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(client_id)
        .bind(&address.label)
        .bind(&address.cep)
        .bind(&address.street)
        .bind(&address.number)
        .bind(&address.complement)
        .bind(&address.neighborhood)
        .bind(&address.city)
        .bind(&address.state)
        .bind(address.is_default)
        .fetch_one(executor)
        .await?;

        Ok(inserted)
    }

    // Os pedidos do cliente sobrevivem (client_id vira NULL e a leitura
    // cai no fallback "Cliente Desconhecido").
    pub async fn delete(&self, user_id: Uuid, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM clients WHERE user_id = $1 AND id = $2")
            .bind(user_id)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

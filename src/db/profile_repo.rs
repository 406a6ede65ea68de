// src/db/profile_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{common::error::AppError, models::profile::Profile};

#[derive(Clone)]
pub struct ProfileRepository {
    pool: PgPool,
}

impl ProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get(&self, user_id: Uuid) -> Result<Option<Profile>, AppError> {
        let profile = sqlx::query_as::<_, Profile>("SELECT * FROM profiles WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(profile)
    }

    /// Cria o perfil vazio junto do registro da conta (mesma transação).
    pub async fn ensure<'e, E>(&self, executor: E, user_id: Uuid, email: &str) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query(
            "INSERT INTO profiles (id, email) VALUES ($1, $2) ON CONFLICT (id) DO NOTHING",
        )
        .bind(user_id)
        .bind(email)
        .execute(executor)
        .await?;

        Ok(())
    }

    /// Atualização parcial; campos omitidos ficam como estão.
    pub async fn update(
        &self,
        user_id: Uuid,
        name: Option<&str>,
        email: Option<&str>,
        phone: Option<&str>,
        document: Option<&str>,
        logo_url: Option<&str>,
    ) -> Result<u64, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE profiles SET
                name       = COALESCE($2, name),
                email      = COALESCE($3, email),
                phone      = COALESCE($4, phone),
                document   = COALESCE($5, document),
                logo_url   = COALESCE($6, logo_url),
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .bind(name)
        .bind(email)
        .bind(phone)
        .bind(document)
        .bind(logo_url)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}

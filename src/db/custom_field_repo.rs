// src/db/custom_field_repo.rs

use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::custom_field::{EntityKind, FieldDefinition, FieldKind},
};

#[derive(Clone)]
pub struct CustomFieldRepository {
    pool: PgPool,
}

impl CustomFieldRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lista as definições da conta para montar o formulário.
    /// Exceção à regra da casa: mais antigas primeiro, para o formulário
    /// manter a ordem em que os campos foram criados.
    pub async fn list(
        &self,
        user_id: Uuid,
        entity_type: Option<EntityKind>,
    ) -> Result<Vec<FieldDefinition>, AppError> {
        let fields = sqlx::query_as::<_, FieldDefinition>(
            r#"
            SELECT * FROM custom_field_definitions
            WHERE user_id = $1
              AND ($2::field_entity IS NULL OR entity_type = $2)
            ORDER BY created_at ASC
            "#,
        )
        .bind(user_id)
        .bind(entity_type)
        .fetch_all(&self.pool)
        .await?;

        Ok(fields)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn insert(
        &self,
        user_id: Uuid,
        entity_type: EntityKind,
        name: &str,
        kind: FieldKind,
        required: bool,
        options: Option<&Value>,
        placeholder: Option<&str>,
    ) -> Result<FieldDefinition, AppError> {
        let field = sqlx::query_as::<_, FieldDefinition>(
            r#"
            INSERT INTO custom_field_definitions (
                user_id, entity_type, name, kind, required, options, placeholder
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(entity_type)
        .bind(name)
        .bind(kind)
        .bind(required)
        .bind(options)
        .bind(placeholder)
        .fetch_one(&self.pool)
        .await?;

        Ok(field)
    }

    // Sem cascata: valores já gravados nas entidades ficam órfãos
    // (dados inertes que o formulário simplesmente deixa de renderizar).
    pub async fn delete(&self, user_id: Uuid, id: Uuid) -> Result<u64, AppError> {
        let result =
            sqlx::query("DELETE FROM custom_field_definitions WHERE user_id = $1 AND id = $2")
                .bind(user_id)
                .bind(id)
                .execute(&self.pool)
                .await?;

        Ok(result.rows_affected())
    }
}

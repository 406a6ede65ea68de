// src/services/catalog_service.rs

use rust_decimal::Decimal;
use serde_json::Value;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{CatalogRepository, CustomFieldRepository},
    models::{
        catalog::Service,
        custom_field::{EntityKind, FieldValue},
    },
    services::custom_field_service::normalize_custom_fields,
};

#[derive(Clone)]
pub struct CatalogService {
    repo: CatalogRepository,
    field_repo: CustomFieldRepository,
    pool: sqlx::PgPool,
}

#[derive(Debug, Default)]
pub struct ServiceDraft {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub active: Option<bool>,
    pub image_url: Option<String>,
    pub custom_fields: Option<Vec<FieldValue>>,
}

impl CatalogService {
    pub fn new(
        repo: CatalogRepository,
        field_repo: CustomFieldRepository,
        pool: sqlx::PgPool,
    ) -> Self {
        Self { repo, field_repo, pool }
    }

    pub async fn list(&self, user_id: Uuid) -> Result<Vec<Service>, AppError> {
        self.repo.list(user_id).await
    }

    pub async fn get(&self, user_id: Uuid, id: Uuid) -> Result<Service, AppError> {
        self.repo
            .find(user_id, id)
            .await?
            .ok_or(AppError::NotFound("Serviço"))
    }

    pub async fn create(&self, user_id: Uuid, draft: ServiceDraft) -> Result<Service, AppError> {
        let custom_fields = self
            .normalized_fields(user_id, draft.custom_fields.as_deref())
            .await?
            .unwrap_or_else(|| Value::Object(Default::default()));

        self.repo
            .insert(
                &self.pool,
                user_id,
                draft.name.as_deref().unwrap_or_default(),
                draft.description.as_deref(),
                draft.price.unwrap_or(Decimal::ZERO),
                draft.active.unwrap_or(true),
                draft.image_url.as_deref(),
                &custom_fields,
            )
            .await
    }

    pub async fn update(
        &self,
        user_id: Uuid,
        id: Uuid,
        draft: ServiceDraft,
    ) -> Result<Service, AppError> {
        let custom_fields = self
            .normalized_fields(user_id, draft.custom_fields.as_deref())
            .await?;

        let updated = self
            .repo
            .update(
                &self.pool,
                user_id,
                id,
                draft.name.as_deref(),
                draft.description.as_deref(),
                draft.price,
                draft.active,
                draft.image_url.as_deref(),
                custom_fields.as_ref(),
            )
            .await?;

        if updated == 0 {
            return Err(AppError::NotFound("Serviço"));
        }

        self.get(user_id, id).await
    }

    pub async fn delete(&self, user_id: Uuid, id: Uuid) -> Result<(), AppError> {
        let deleted = self.repo.delete(user_id, id).await?;
        if deleted == 0 {
            return Err(AppError::NotFound("Serviço"));
        }
        Ok(())
    }

    async fn normalized_fields(
        &self,
        user_id: Uuid,
        values: Option<&[FieldValue]>,
    ) -> Result<Option<Value>, AppError> {
        let Some(values) = values else {
            return Ok(None);
        };

        let definitions = self.field_repo.list(user_id, Some(EntityKind::Service)).await?;
        Ok(Some(normalize_custom_fields(&definitions, values)))
    }
}

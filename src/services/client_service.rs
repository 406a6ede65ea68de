// src/services/client_service.rs

use chrono::NaiveDate;
use serde_json::Value;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{ClientRepository, CustomFieldRepository},
    models::{
        client::{AddressInput, Client},
        custom_field::{EntityKind, FieldValue},
    },
    services::custom_field_service::normalize_custom_fields,
};

/// Garante a invariante: um cliente com endereços tem exatamente um marcado
/// como padrão. O último marcado no payload vence; nenhum marcado promove o
/// primeiro da lista.
pub fn normalize_default_flags(addresses: &mut [AddressInput]) {
    let last_default = addresses.iter().rposition(|address| address.is_default);

    let winner = match last_default {
        Some(position) => position,
        None if !addresses.is_empty() => 0,
        None => return,
    };

    for (index, address) in addresses.iter_mut().enumerate() {
        address.is_default = index == winner;
    }
}

#[derive(Clone)]
pub struct ClientService {
    repo: ClientRepository,
    field_repo: CustomFieldRepository,
    pool: sqlx::PgPool,
}

#[derive(Debug, Default)]
pub struct ClientDraft {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub document: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub avatar_url: Option<String>,
    pub addresses: Option<Vec<AddressInput>>,
    pub custom_fields: Option<Vec<FieldValue>>,
}

impl ClientService {
    pub fn new(
        repo: ClientRepository,
        field_repo: CustomFieldRepository,
        pool: sqlx::PgPool,
    ) -> Self {
        Self { repo, field_repo, pool }
    }

    pub async fn list(&self, user_id: Uuid) -> Result<Vec<Client>, AppError> {
        self.repo.list(user_id).await
    }

    pub async fn get(&self, user_id: Uuid, id: Uuid) -> Result<Client, AppError> {
        self.repo
            .find(user_id, id)
            .await?
            .ok_or(AppError::NotFound("Cliente"))
    }

    /// Cliente + endereços na mesma transação.
    pub async fn create(&self, user_id: Uuid, draft: ClientDraft) -> Result<Client, AppError> {
        let mut addresses = draft.addresses.unwrap_or_default();
        normalize_default_flags(&mut addresses);

        let custom_fields = self
            .normalized_fields(user_id, draft.custom_fields.as_deref())
            .await?
            .unwrap_or_else(|| Value::Object(Default::default()));

        let mut tx = self.pool.begin().await?;

        let client = self
            .repo
            .insert_client(
                &mut *tx,
                user_id,
                draft.name.as_deref().unwrap_or_default(),
                draft.email.as_deref().unwrap_or_default(),
                draft.phone.as_deref().unwrap_or_default(),
                draft.document.as_deref().unwrap_or_default(),
                draft.birth_date,
                draft.avatar_url.as_deref(),
                &custom_fields,
            )
            .await?;

        for address in &addresses {
            self.repo.insert_address(&mut *tx, client.id, address).await?;
        }

        tx.commit().await?;

        self.get(user_id, client.id).await
    }

    /// `addresses` presente no payload troca o conjunto inteiro; ausente,
    /// os endereços atuais ficam intactos.
    pub async fn update(
        &self,
        user_id: Uuid,
        id: Uuid,
        draft: ClientDraft,
    ) -> Result<Client, AppError> {
        // Confirma a posse antes de tocar em qualquer coisa.
        self.get(user_id, id).await?;

        let custom_fields = self
            .normalized_fields(user_id, draft.custom_fields.as_deref())
            .await?;

        let mut tx = self.pool.begin().await?;

        self.repo
            .update_client(
                &mut *tx,
                user_id,
                id,
                draft.name.as_deref(),
                draft.email.as_deref(),
                draft.phone.as_deref(),
                draft.document.as_deref(),
                draft.birth_date,
                draft.avatar_url.as_deref(),
                custom_fields.as_ref(),
            )
            .await?;

        if let Some(mut addresses) = draft.addresses {
            normalize_default_flags(&mut addresses);
            self.repo.delete_addresses(&mut *tx, id).await?;
            for address in &addresses {
                self.repo.insert_address(&mut *tx, id, address).await?;
            }
        }

        tx.commit().await?;

        self.get(user_id, id).await
    }

    pub async fn delete(&self, user_id: Uuid, id: Uuid) -> Result<(), AppError> {
        let deleted = self.repo.delete(user_id, id).await?;
        if deleted == 0 {
            return Err(AppError::NotFound("Cliente"));
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

        let definitions = self.field_repo.list(user_id, Some(EntityKind::Client)).await?;
        Ok(Some(normalize_custom_fields(&definitions, values)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address(label: &str, is_default: bool) -> AddressInput {
        AddressInput {
            label: label.to_string(),
            cep: "01310-100".to_string(),
            street: "Av. Paulista".to_string(),
            number: "1000".to_string(),
            complement: None,
            neighborhood: "Bela Vista".to_string(),
            city: "São Paulo".to_string(),
            state: "SP".to_string(),
            is_default,
        }
    }

    #[test]
    fn ultimo_marcado_como_padrao_vence() {
        let mut addresses = vec![
            address("Casa", true),
            address("Trabalho", false),
            address("Sítio", true),
        ];

        normalize_default_flags(&mut addresses);

        assert!(!addresses[0].is_default);
        assert!(!addresses[1].is_default);
        assert!(addresses[2].is_default);
    }

    #[test]
    fn nenhum_marcado_promove_o_primeiro() {
        let mut addresses = vec![address("Casa", false), address("Trabalho", false)];

        normalize_default_flags(&mut addresses);

        assert!(addresses[0].is_default);
        assert!(!addresses[1].is_default);
    }

    #[test]
    fn um_unico_marcado_permanece() {
        let mut addresses = vec![address("Casa", false), address("Trabalho", true)];

        normalize_default_flags(&mut addresses);

        assert!(!addresses[0].is_default);
        assert!(addresses[1].is_default);
    }

    #[test]
    fn lista_vazia_nao_faz_nada() {
        let mut addresses: Vec<AddressInput> = Vec::new();
        normalize_default_flags(&mut addresses);
        assert!(addresses.is_empty());
    }
}

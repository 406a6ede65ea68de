// src/models/client.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id: Uuid,
    #[schema(ignore)]
    pub client_id: Uuid,

    #[schema(example = "Casa")]
    pub label: String,
    #[schema(example = "01310-100")]
    pub cep: String,
    #[schema(example = "Av. Paulista")]
    pub street: String,
    #[schema(example = "1000")]
    pub number: String,
    pub complement: Option<String>,
    #[schema(example = "Bela Vista")]
    pub neighborhood: String,
    #[schema(example = "São Paulo")]
    pub city: String,
    #[schema(example = "SP")]
    pub state: String,

    // Invariante: no máximo um endereço padrão por cliente.
    pub is_default: bool,
}

// Forma de edição de um endereço: o conjunto inteiro é reenviado a cada
// salvamento (estratégia replace-all), então não carrega id.
#[derive(Debug, Clone, Serialize, Deserialize, validator::Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddressInput {
    #[validate(length(min = 1, message = "Informe a identificação"))]
    #[schema(example = "Casa")]
    pub label: String,
    #[validate(length(min = 1, message = "Informe o CEP"))]
    #[schema(example = "01310-100")]
    pub cep: String,
    #[validate(length(min = 1, message = "Informe o logradouro"))]
    #[schema(example = "Av. Paulista")]
    pub street: String,
    #[schema(example = "1000")]
    pub number: String,
    pub complement: Option<String>,
    #[schema(example = "Bela Vista")]
    pub neighborhood: String,
    #[validate(length(min = 1, message = "Informe a cidade"))]
    #[schema(example = "São Paulo")]
    pub city: String,
    #[validate(length(min = 1, max = 2, message = "UF inválida"))]
    #[schema(example = "SP")]
    pub state: String,
    #[serde(default)]
    pub is_default: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: Uuid,
    #[schema(ignore)]
    pub user_id: Uuid,

    #[schema(example = "Maria Silva")]
    pub name: String,
    #[schema(example = "maria@email.com")]
    pub email: String,
    #[schema(example = "(11) 98888-7777")]
    pub phone: String,
    #[schema(example = "123.456.789-00")]
    pub document: String,

    #[schema(value_type = Option<String>, format = Date, example = "1990-05-20")]
    pub birth_date: Option<NaiveDate>,

    pub avatar_url: Option<String>,

    // Mapa { id da definição -> valor }, esparso.
    #[schema(example = json!({"550e8400-e29b-41d4-a716-446655440000": "ABC-123"}))]
    pub custom_fields: Value,

    // Preenchido pelo repositório num segundo passo (não vem do FromRow).
    #[sqlx(skip)]
    pub addresses: Vec<Address>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

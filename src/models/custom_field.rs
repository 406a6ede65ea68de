// src/models/custom_field.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// --- Enums (mapeiam os CREATE TYPE do banco) ---

// Quais entidades podem carregar campos personalizados.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "field_entity", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Client,
    Service,
    Order,
}

// O tipo do campo decide qual input é renderizado e como o valor é normalizado.
// Enum fechado: adicionar um tipo novo força o `match` exaustivo a ser revisto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "field_kind", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Number,
    Date,
    Select,
    Textarea,
    Checkbox,
}

// --- O Molde ---

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    pub id: Uuid,
    #[schema(ignore)]
    pub user_id: Uuid,

    pub entity_type: EntityKind,

    #[schema(example = "Número de série")]
    pub name: String,

    pub kind: FieldKind,

    // `required` é armazenado e exibido (asterisco no formulário), mas a
    // submissão não é bloqueada quando o valor falta.
    pub required: bool,

    // Opções para Select (ex: ["P", "M", "G"]). Null para os demais tipos.
    #[schema(example = json!(["P", "M", "G"]))]
    pub options: Option<Value>,

    pub placeholder: Option<String>,

    pub created_at: DateTime<Utc>,
}

// --- O Dado ---

// Forma de lista usada na edição: uma entrada por campo preenchido,
// chaveada pelo id da definição. A forma persistida é o mapa JSONB.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FieldValue {
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub field_id: String,
    pub value: Value,
}

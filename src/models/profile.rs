// src/models/profile.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// Dados do negócio exibidos nas configurações e no cabeçalho do recibo.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: Uuid,

    #[schema(example = "Service Flow Pro")]
    pub name: String,
    #[schema(example = "contato@empresa.com")]
    pub email: String,
    #[schema(example = "(11) 99999-0000")]
    pub phone: String,
    #[schema(example = "12.345.678/0001-00")]
    pub document: String,

    pub logo_url: Option<String>,

    pub updated_at: DateTime<Utc>,
}

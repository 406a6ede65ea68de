// src/handlers/clients.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::{
        client::{AddressInput, Client},
        custom_field::FieldValue,
    },
    services::client_service::ClientDraft,
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateClientPayload {
    #[validate(length(min = 1, message = "Informe o nome"))]
    #[schema(example = "Maria Silva")]
    pub name: String,

    #[schema(example = "maria@email.com")]
    pub email: Option<String>,
    #[schema(example = "(11) 98888-7777")]
    pub phone: Option<String>,
    #[schema(example = "123.456.789-00")]
    pub document: Option<String>,

    #[schema(value_type = Option<String>, format = Date, example = "1990-05-20")]
    pub birth_date: Option<NaiveDate>,
    pub avatar_url: Option<String>,

    #[validate(nested)]
    #[serde(default)]
    pub addresses: Vec<AddressInput>,

    #[serde(default)]
    pub custom_fields: Vec<FieldValue>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClientPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub document: Option<String>,
    #[schema(value_type = Option<String>, format = Date)]
    pub birth_date: Option<NaiveDate>,
    pub avatar_url: Option<String>,

    // Presente troca o conjunto inteiro; ausente preserva o atual.
    #[validate(nested)]
    pub addresses: Option<Vec<AddressInput>>,
    pub custom_fields: Option<Vec<FieldValue>>,
}

// GET /api/clients
#[utoipa::path(
    get,
    path = "/api/clients",
    tag = "Clients",
    responses(
        (status = 200, description = "Clientes da conta, mais recentes primeiro", body = [Client])
    ),
    security(("api_jwt" = []))
)]
pub async fn list_clients(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<Json<Vec<Client>>, AppError> {
    let clients = app_state.client_service.list(user.id).await?;
    Ok(Json(clients))
}

// GET /api/clients/{id}
#[utoipa::path(
    get,
    path = "/api/clients/{id}",
    tag = "Clients",
    params(("id" = Uuid, Path, description = "ID do cliente")),
    responses(
        (status = 200, description = "Cliente com endereços", body = Client),
        (status = 404, description = "Cliente não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_client(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Client>, AppError> {
    let client = app_state.client_service.get(user.id, id).await?;
    Ok(Json(client))
}

// POST /api/clients
#[utoipa::path(
    post,
    path = "/api/clients",
    tag = "Clients",
    request_body = CreateClientPayload,
    responses(
        (status = 201, description = "Cliente criado", body = Client)
    ),
    security(("api_jwt" = []))
)]
pub async fn create_client(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(payload): Json<CreateClientPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let draft = ClientDraft {
        name: Some(payload.name),
        email: payload.email,
        phone: payload.phone,
        document: payload.document,
        birth_date: payload.birth_date,
        avatar_url: payload.avatar_url,
        addresses: Some(payload.addresses),
        custom_fields: Some(payload.custom_fields),
    };

    let client = app_state.client_service.create(user.id, draft).await?;

    Ok((StatusCode::CREATED, Json(client)))
}

// PUT /api/clients/{id}
#[utoipa::path(
    put,
    path = "/api/clients/{id}",
    tag = "Clients",
    params(("id" = Uuid, Path, description = "ID do cliente")),
    request_body = UpdateClientPayload,
    responses(
        (status = 200, description = "Cliente atualizado", body = Client),
        (status = 404, description = "Cliente não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_client(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateClientPayload>,
) -> Result<Json<Client>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let draft = ClientDraft {
        name: payload.name,
        email: payload.email,
        phone: payload.phone,
        document: payload.document,
        birth_date: payload.birth_date,
        avatar_url: payload.avatar_url,
        addresses: payload.addresses,
        custom_fields: payload.custom_fields,
    };

    let client = app_state.client_service.update(user.id, id, draft).await?;

    Ok(Json(client))
}

// DELETE /api/clients/{id}
#[utoipa::path(
    delete,
    path = "/api/clients/{id}",
    tag = "Clients",
    params(("id" = Uuid, Path, description = "ID do cliente")),
    responses(
        (status = 204, description = "Cliente removido; pedidos dele sobrevivem sem vínculo"),
        (status = 404, description = "Cliente não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_client(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    app_state.client_service.delete(user.id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

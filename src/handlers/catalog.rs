// src/handlers/catalog.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::{catalog::Service, custom_field::FieldValue},
    services::catalog_service::ServiceDraft,
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateServicePayload {
    #[validate(length(min = 1, message = "Informe o nome do serviço"))]
    #[schema(example = "Troca de óleo")]
    pub name: String,

    pub description: Option<String>,

    #[schema(example = "120.00")]
    pub price: Decimal,

    // Ausente entra como ativo.
    pub active: Option<bool>,
    pub image_url: Option<String>,

    #[serde(default)]
    pub custom_fields: Vec<FieldValue>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateServicePayload {
    pub name: Option<String>,
    pub description: Option<String>,
    #[schema(example = "150.00")]
    pub price: Option<Decimal>,
    pub active: Option<bool>,
    pub image_url: Option<String>,
    pub custom_fields: Option<Vec<FieldValue>>,
}

// GET /api/services
#[utoipa::path(
    get,
    path = "/api/services",
    tag = "Catalog",
    responses(
        (status = 200, description = "Catálogo da conta", body = [Service])
    ),
    security(("api_jwt" = []))
)]
pub async fn list_services(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<Json<Vec<Service>>, AppError> {
    let services = app_state.catalog_service.list(user.id).await?;
    Ok(Json(services))
}

// GET /api/services/{id}
#[utoipa::path(
    get,
    path = "/api/services/{id}",
    tag = "Catalog",
    params(("id" = Uuid, Path, description = "ID do serviço")),
    responses(
        (status = 200, description = "Serviço do catálogo", body = Service),
        (status = 404, description = "Serviço não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_service(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Service>, AppError> {
    let service = app_state.catalog_service.get(user.id, id).await?;
    Ok(Json(service))
}

// POST /api/services
#[utoipa::path(
    post,
    path = "/api/services",
    tag = "Catalog",
    request_body = CreateServicePayload,
    responses(
        (status = 201, description = "Serviço criado", body = Service)
    ),
    security(("api_jwt" = []))
)]
pub async fn create_service(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(payload): Json<CreateServicePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let draft = ServiceDraft {
        name: Some(payload.name),
        description: payload.description,
        price: Some(payload.price),
        active: payload.active,
        image_url: payload.image_url,
        custom_fields: Some(payload.custom_fields),
    };

    let service = app_state.catalog_service.create(user.id, draft).await?;

    Ok((StatusCode::CREATED, Json(service)))
}

// PUT /api/services/{id}
#[utoipa::path(
    put,
    path = "/api/services/{id}",
    tag = "Catalog",
    params(("id" = Uuid, Path, description = "ID do serviço")),
    request_body = UpdateServicePayload,
    responses(
        (status = 200, description = "Serviço atualizado; pedidos existentes não mudam", body = Service),
        (status = 404, description = "Serviço não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_service(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateServicePayload>,
) -> Result<Json<Service>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let draft = ServiceDraft {
        name: payload.name,
        description: payload.description,
        price: payload.price,
        active: payload.active,
        image_url: payload.image_url,
        custom_fields: payload.custom_fields,
    };

    let service = app_state.catalog_service.update(user.id, id, draft).await?;

    Ok(Json(service))
}

// DELETE /api/services/{id}
#[utoipa::path(
    delete,
    path = "/api/services/{id}",
    tag = "Catalog",
    params(("id" = Uuid, Path, description = "ID do serviço")),
    responses(
        (status = 204, description = "Serviço removido do catálogo"),
        (status = 404, description = "Serviço não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_service(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    app_state.catalog_service.delete(user.id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

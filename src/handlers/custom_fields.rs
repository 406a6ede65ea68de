// src/handlers/custom_fields.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::custom_field::{EntityKind, FieldDefinition, FieldKind},
};

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ListFieldsQuery {
    // Ausente lista as definições de todas as entidades.
    pub entity_type: Option<EntityKind>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateFieldPayload {
    #[schema(example = "client")]
    pub entity_type: EntityKind,

    #[validate(length(min = 1, message = "Informe o nome do campo"))]
    #[schema(example = "Número de série")]
    pub name: String,

    #[schema(example = "select")]
    pub kind: FieldKind,

    #[serde(default)]
    pub required: bool,

    // Só para Select; ignorado nos demais tipos.
    #[schema(example = json!(["P", "M", "G"]))]
    pub options: Option<Value>,

    pub placeholder: Option<String>,
}

// GET /api/custom-fields
#[utoipa::path(
    get,
    path = "/api/custom-fields",
    tag = "Custom Fields",
    params(ListFieldsQuery),
    responses(
        (status = 200, description = "Definições na ordem de criação", body = [FieldDefinition])
    ),
    security(("api_jwt" = []))
)]
pub async fn list_field_definitions(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Query(query): Query<ListFieldsQuery>,
) -> Result<Json<Vec<FieldDefinition>>, AppError> {
    let fields = app_state
        .custom_field_service
        .list(user.id, query.entity_type)
        .await?;

    Ok(Json(fields))
}

// POST /api/custom-fields
#[utoipa::path(
    post,
    path = "/api/custom-fields",
    tag = "Custom Fields",
    request_body = CreateFieldPayload,
    responses(
        (status = 201, description = "Definição criada", body = FieldDefinition)
    ),
    security(("api_jwt" = []))
)]
pub async fn create_field_definition(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(payload): Json<CreateFieldPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let field = app_state
        .custom_field_service
        .create(
            user.id,
            payload.entity_type,
            &payload.name,
            payload.kind,
            payload.required,
            payload.options,
            payload.placeholder.as_deref(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(field)))
}

// DELETE /api/custom-fields/{id}
#[utoipa::path(
    delete,
    path = "/api/custom-fields/{id}",
    tag = "Custom Fields",
    params(("id" = Uuid, Path, description = "ID da definição")),
    responses(
        (status = 204, description = "Definição removida; valores já gravados ficam órfãos"),
        (status = 404, description = "Definição não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_field_definition(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    app_state.custom_field_service.delete(user.id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// src/handlers/orders.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::{
        custom_field::FieldValue,
        order::{OrderPriority, OrderStatus, ServiceItem, ServiceOrder},
        receipt::ReceiptView,
    },
    services::order_service::OrderDraft,
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderPayload {
    pub client_id: Option<Uuid>,

    #[schema(example = "start")]
    pub status: Option<OrderStatus>,
    #[schema(example = "normal")]
    pub priority: Option<OrderPriority>,

    // Linhas do pedido com nome/preço já resolvidos pelo formulário.
    #[serde(default)]
    pub services: Vec<ServiceItem>,

    #[schema(example = "30.00")]
    pub discount: Option<Decimal>,

    pub description: Option<String>,
    pub scheduled_at: Option<DateTime<Utc>>,
    #[schema(example = "OS-0042")]
    pub number: Option<String>,
    pub image_url: Option<String>,

    #[serde(default)]
    pub custom_fields: Vec<FieldValue>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderPayload {
    pub client_id: Option<Uuid>,
    pub status: Option<OrderStatus>,
    pub priority: Option<OrderPriority>,

    // Presente troca o conjunto inteiro de itens; ausente preserva o atual.
    pub services: Option<Vec<ServiceItem>>,
    pub discount: Option<Decimal>,

    pub description: Option<String>,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub number: Option<String>,
    pub image_url: Option<String>,
    pub custom_fields: Option<Vec<FieldValue>>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddOrderItemPayload {
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub service_id: Uuid,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChangeItemQuantityPayload {
    #[validate(length(min = 1, message = "Informe o nome do item"))]
    #[schema(example = "Troca de óleo")]
    pub name: String,

    #[schema(example = -1)]
    pub delta: i32,
}

// GET /api/orders
#[utoipa::path(
    get,
    path = "/api/orders",
    tag = "Orders",
    responses(
        (status = 200, description = "Pedidos da conta, mais recentes primeiro", body = [ServiceOrder])
    ),
    security(("api_jwt" = []))
)]
pub async fn list_orders(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<Json<Vec<ServiceOrder>>, AppError> {
    let orders = app_state.order_service.list(user.id).await?;
    Ok(Json(orders))
}

// GET /api/orders/{id}
#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    tag = "Orders",
    params(("id" = Uuid, Path, description = "ID do pedido")),
    responses(
        (status = 200, description = "Pedido com itens", body = ServiceOrder),
        (status = 404, description = "Pedido não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_order(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ServiceOrder>, AppError> {
    let order = app_state.order_service.get(user.id, id).await?;
    Ok(Json(order))
}

// POST /api/orders
#[utoipa::path(
    post,
    path = "/api/orders",
    tag = "Orders",
    request_body = CreateOrderPayload,
    responses(
        (status = 201, description = "Pedido criado com o total recalculado no servidor", body = ServiceOrder)
    ),
    security(("api_jwt" = []))
)]
pub async fn create_order(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(payload): Json<CreateOrderPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let draft = OrderDraft {
        client_id: payload.client_id,
        status: payload.status,
        priority: payload.priority,
        services: Some(payload.services),
        discount: payload.discount,
        description: payload.description,
        scheduled_at: payload.scheduled_at,
        number: payload.number,
        image_url: payload.image_url,
        custom_fields: Some(payload.custom_fields),
    };

    let order = app_state.order_service.create(user.id, draft).await?;

    Ok((StatusCode::CREATED, Json(order)))
}

// PUT /api/orders/{id}
#[utoipa::path(
    put,
    path = "/api/orders/{id}",
    tag = "Orders",
    params(("id" = Uuid, Path, description = "ID do pedido")),
    request_body = UpdateOrderPayload,
    responses(
        (status = 200, description = "Pedido atualizado", body = ServiceOrder),
        (status = 404, description = "Pedido não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_order(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateOrderPayload>,
) -> Result<Json<ServiceOrder>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let draft = OrderDraft {
        client_id: payload.client_id,
        status: payload.status,
        priority: payload.priority,
        services: payload.services,
        discount: payload.discount,
        description: payload.description,
        scheduled_at: payload.scheduled_at,
        number: payload.number,
        image_url: payload.image_url,
        custom_fields: payload.custom_fields,
    };

    let order = app_state.order_service.update(user.id, id, draft).await?;

    Ok(Json(order))
}

// POST /api/orders/{id}/items
#[utoipa::path(
    post,
    path = "/api/orders/{id}/items",
    tag = "Orders",
    params(("id" = Uuid, Path, description = "ID do pedido")),
    request_body = AddOrderItemPayload,
    responses(
        (status = 200, description = "Serviço adicionado (ou quantidade incrementada)", body = ServiceOrder),
        (status = 404, description = "Pedido ou serviço não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn add_order_item(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<AddOrderItemPayload>,
) -> Result<Json<ServiceOrder>, AppError> {
    let order = app_state
        .order_service
        .add_catalog_service(user.id, id, payload.service_id)
        .await?;

    Ok(Json(order))
}

// PATCH /api/orders/{id}/items
#[utoipa::path(
    patch,
    path = "/api/orders/{id}/items",
    tag = "Orders",
    params(("id" = Uuid, Path, description = "ID do pedido")),
    request_body = ChangeItemQuantityPayload,
    responses(
        (status = 200, description = "Quantidade ajustada; zero remove a linha", body = ServiceOrder),
        (status = 404, description = "Pedido ou item não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn change_order_item(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<ChangeItemQuantityPayload>,
) -> Result<Json<ServiceOrder>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let order = app_state
        .order_service
        .change_item_quantity(user.id, id, &payload.name, payload.delta)
        .await?;

    Ok(Json(order))
}

// GET /api/orders/{id}/receipt
#[utoipa::path(
    get,
    path = "/api/orders/{id}/receipt",
    tag = "Orders",
    params(("id" = Uuid, Path, description = "ID do pedido")),
    responses(
        (status = 200, description = "Recibo já formatado para impressão", body = ReceiptView),
        (status = 404, description = "Pedido não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_order_receipt(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ReceiptView>, AppError> {
    let receipt = app_state.receipt_service.for_order(user.id, id).await?;
    Ok(Json(receipt))
}

// DELETE /api/orders/{id}
#[utoipa::path(
    delete,
    path = "/api/orders/{id}",
    tag = "Orders",
    params(("id" = Uuid, Path, description = "ID do pedido")),
    responses(
        (status = 204, description = "Pedido removido; transações dele sobrevivem sem vínculo"),
        (status = 404, description = "Pedido não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_order(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    app_state.order_service.delete(user.id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

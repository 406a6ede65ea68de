// src/handlers/transactions.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::finance::{FinanceSummary, Transaction, TransactionKind},
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionPayload {
    pub order_id: Option<Uuid>,

    #[schema(example = "180.00")]
    pub amount: Decimal,

    // Ausente assume o dia corrente.
    #[schema(value_type = Option<String>, format = Date, example = "2025-01-03")]
    pub date: Option<NaiveDate>,

    #[schema(example = "received")]
    pub kind: TransactionKind,
}

// GET /api/transactions
#[utoipa::path(
    get,
    path = "/api/transactions",
    tag = "Finance",
    responses(
        (status = 200, description = "Transações da conta, mais recentes primeiro", body = [Transaction])
    ),
    security(("api_jwt" = []))
)]
pub async fn list_transactions(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<Json<Vec<Transaction>>, AppError> {
    let transactions = app_state.finance_service.list(user.id).await?;
    Ok(Json(transactions))
}

// GET /api/transactions/summary
#[utoipa::path(
    get,
    path = "/api/transactions/summary",
    tag = "Finance",
    responses(
        (status = 200, description = "Totais da página financeira", body = FinanceSummary)
    ),
    security(("api_jwt" = []))
)]
pub async fn get_finance_summary(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<Json<FinanceSummary>, AppError> {
    let summary = app_state.finance_service.summary(user.id).await?;
    Ok(Json(summary))
}

// POST /api/transactions
#[utoipa::path(
    post,
    path = "/api/transactions",
    tag = "Finance",
    request_body = CreateTransactionPayload,
    responses(
        (status = 201, description = "Transação registrada", body = Transaction),
        (status = 404, description = "Pedido vinculado não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_transaction(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(payload): Json<CreateTransactionPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let transaction = app_state
        .finance_service
        .create(
            user.id,
            payload.order_id,
            payload.amount,
            payload.date,
            payload.kind,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(transaction)))
}

// DELETE /api/transactions/{id}
#[utoipa::path(
    delete,
    path = "/api/transactions/{id}",
    tag = "Finance",
    params(("id" = Uuid, Path, description = "ID da transação")),
    responses(
        (status = 204, description = "Transação removida"),
        (status = 404, description = "Transação não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_transaction(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    app_state.finance_service.delete(user.id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// src/handlers/profile.rs

use axum::{extract::State, Json};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::profile::Profile,
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfilePayload {
    #[schema(example = "Oficina da Maria")]
    pub name: Option<String>,

    #[validate(email(message = "E-mail inválido"))]
    #[schema(example = "contato@oficina.com")]
    pub email: Option<String>,

    #[schema(example = "(11) 99999-0000")]
    pub phone: Option<String>,
    #[schema(example = "12.345.678/0001-00")]
    pub document: Option<String>,
    pub logo_url: Option<String>,
}

// GET /api/profile
#[utoipa::path(
    get,
    path = "/api/profile",
    tag = "Profile",
    responses(
        (status = 200, description = "Perfil do negócio", body = Profile)
    ),
    security(("api_jwt" = []))
)]
pub async fn get_profile(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<Json<Profile>, AppError> {
    let profile = app_state.profile_service.get(user.id).await?;
    Ok(Json(profile))
}

// PUT /api/profile
#[utoipa::path(
    put,
    path = "/api/profile",
    tag = "Profile",
    request_body = UpdateProfilePayload,
    responses(
        (status = 200, description = "Perfil atualizado", body = Profile)
    ),
    security(("api_jwt" = []))
)]
pub async fn update_profile(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(payload): Json<UpdateProfilePayload>,
) -> Result<Json<Profile>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let profile = app_state
        .profile_service
        .update(
            user.id,
            payload.name.as_deref(),
            payload.email.as_deref(),
            payload.phone.as_deref(),
            payload.document.as_deref(),
            payload.logo_url.as_deref(),
        )
        .await?;

    Ok(Json(profile))
}

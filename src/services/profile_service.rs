// src/services/profile_service.rs

use uuid::Uuid;

use crate::{common::error::AppError, db::ProfileRepository, models::profile::Profile};

#[derive(Clone)]
pub struct ProfileService {
    repo: ProfileRepository,
}

impl ProfileService {
    pub fn new(repo: ProfileRepository) -> Self {
        Self { repo }
    }

    pub async fn get(&self, user_id: Uuid) -> Result<Profile, AppError> {
        self.repo
            .get(user_id)
            .await?
            .ok_or(AppError::NotFound("Perfil"))
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        user_id: Uuid,
        name: Option<&str>,
        email: Option<&str>,
        phone: Option<&str>,
        document: Option<&str>,
        logo_url: Option<&str>,
    ) -> Result<Profile, AppError> {
        let updated = self
            .repo
            .update(user_id, name, email, phone, document, logo_url)
            .await?;

        if updated == 0 {
            return Err(AppError::NotFound("Perfil"));
        }

        self.get(user_id).await
    }
}

// src/services/dashboard_service.rs

use uuid::Uuid;

use crate::{common::error::AppError, db::DashboardRepository, models::dashboard::DashboardSummary};

#[derive(Clone)]
pub struct DashboardService {
    repo: DashboardRepository,
}

impl DashboardService {
    pub fn new(repo: DashboardRepository) -> Self {
        Self { repo }
    }

    pub async fn summary(&self, user_id: Uuid) -> Result<DashboardSummary, AppError> {
        self.repo.summary(user_id).await
    }
}

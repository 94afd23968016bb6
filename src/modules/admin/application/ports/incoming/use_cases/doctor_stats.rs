use async_trait::async_trait;

use crate::admin::application::domain::entities::DoctorWithStats;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DoctorStatsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListDoctorsWithStatsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<DoctorWithStats>, DoctorStatsError>;
}

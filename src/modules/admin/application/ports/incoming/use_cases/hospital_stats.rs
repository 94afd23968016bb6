use async_trait::async_trait;

use crate::admin::application::domain::entities::HospitalStats;

#[derive(Debug, Clone, thiserror::Error)]
pub enum HospitalStatsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait HospitalStatsUseCase: Send + Sync {
    async fn execute(&self) -> Result<HospitalStats, HospitalStatsError>;
}

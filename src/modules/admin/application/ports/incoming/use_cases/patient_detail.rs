use async_trait::async_trait;

use crate::admin::application::domain::entities::PatientDetail;
use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum PatientDetailError {
    #[error("Patient not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait PatientDetailUseCase: Send + Sync {
    async fn execute(&self, patient_id: UserId) -> Result<PatientDetail, PatientDetailError>;
}

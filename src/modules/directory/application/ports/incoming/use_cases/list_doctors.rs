use async_trait::async_trait;

use crate::directory::application::domain::entities::DoctorListing;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListDoctorsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Every doctor, ordered by name.
#[async_trait]
pub trait ListDoctorsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<DoctorListing>, ListDoctorsError>;
}

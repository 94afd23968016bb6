use async_trait::async_trait;

use crate::appointment::application::domain::entities::AppointmentView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum AllAppointmentsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Every appointment, newest first, with both parties attached.
#[async_trait]
pub trait AllAppointmentsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<AppointmentView>, AllAppointmentsError>;
}

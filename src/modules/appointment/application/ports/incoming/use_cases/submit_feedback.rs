use async_trait::async_trait;
use uuid::Uuid;

use crate::appointment::application::domain::entities::{Appointment, Feedback};
use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitFeedbackError {
    #[error("Appointment not found")]
    NotFound,

    #[error("Not authorized to provide feedback for this appointment")]
    NotOwner,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SubmitFeedbackUseCase: Send + Sync {
    async fn execute(
        &self,
        patient_id: UserId,
        appointment_id: Uuid,
        feedback: Feedback,
    ) -> Result<Appointment, SubmitFeedbackError>;
}

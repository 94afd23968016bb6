use async_trait::async_trait;
use uuid::Uuid;

use crate::appointment::application::domain::entities::{Appointment, AppointmentStatus};
use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CancelAppointmentError {
    #[error("Appointment not found")]
    NotFound,

    #[error("Not authorized to cancel this appointment")]
    NotOwner,

    #[error("Cannot cancel an appointment that is {0}")]
    InvalidStatus(AppointmentStatus),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CancelAppointmentUseCase: Send + Sync {
    async fn execute(
        &self,
        patient_id: UserId,
        appointment_id: Uuid,
    ) -> Result<Appointment, CancelAppointmentError>;
}

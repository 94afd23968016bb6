use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::appointment::application::domain::entities::AppointmentView;
use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone)]
pub struct BookAppointmentCommand {
    pub patient_id: UserId,
    pub doctor_id: UserId,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum BookAppointmentError {
    #[error("Appointments can only be booked Monday to Friday, 9 AM to 4 PM")]
    OutsideBusinessHours,

    #[error("Cannot book appointments in the past")]
    InPast,

    #[error("Doctor not found")]
    DoctorNotFound,

    #[error("Patient not found")]
    PatientNotFound,

    #[error("This slot is already booked")]
    SlotTaken,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait BookAppointmentUseCase: Send + Sync {
    /// Returns the new appointment with both parties attached.
    async fn execute(
        &self,
        command: BookAppointmentCommand,
    ) -> Result<AppointmentView, BookAppointmentError>;
}

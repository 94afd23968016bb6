use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::appointment::application::domain::entities::{Appointment, AppointmentStatus, Feedback};
use crate::medical_record::application::domain::entities::{MedicalRecord, NewMedicalRecord};

#[derive(Debug, Clone)]
pub struct NewAppointment {
    pub patient_id: Uuid,
    pub doctor_id: Uuid,
    pub date: DateTime<Utc>,
    pub status: AppointmentStatus,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AppointmentRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Appointment not found")]
    NotFound,

    /// Another live appointment already holds the doctor's slot.
    #[error("Slot already booked")]
    SlotTaken,

    /// The row moved out of pending/booked before the write landed.
    #[error("Appointment is {0}")]
    InvalidStatus(AppointmentStatus),
}

#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    async fn insert(&self, data: NewAppointment) -> Result<Appointment, AppointmentRepositoryError>;

    /// Cancels the appointment only while it is still pending or booked.
    async fn cancel(&self, appointment_id: Uuid) -> Result<Appointment, AppointmentRepositoryError>;

    async fn set_feedback(
        &self,
        appointment_id: Uuid,
        feedback: Feedback,
    ) -> Result<Appointment, AppointmentRepositoryError>;

    /// Marks the appointment completed and writes its medical record in one
    /// transaction. The status is re-checked on the locked row.
    async fn complete_with_record(
        &self,
        appointment_id: Uuid,
        record: NewMedicalRecord,
    ) -> Result<(Appointment, MedicalRecord), AppointmentRepositoryError>;
}

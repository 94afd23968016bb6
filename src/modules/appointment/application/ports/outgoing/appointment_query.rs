use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::appointment::application::domain::entities::{Appointment, AppointmentStatus};

#[derive(Debug, Clone, thiserror::Error)]
pub enum AppointmentQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Corrupted appointment row: {0}")]
    CorruptedRow(String),
}

#[async_trait]
pub trait AppointmentQuery: Send + Sync {
    async fn find_by_id(
        &self,
        appointment_id: Uuid,
    ) -> Result<Option<Appointment>, AppointmentQueryError>;

    /// Newest first.
    async fn list_for_patient(
        &self,
        patient_id: Uuid,
    ) -> Result<Vec<Appointment>, AppointmentQueryError>;

    /// Oldest first.
    async fn list_for_doctor(
        &self,
        doctor_id: Uuid,
    ) -> Result<Vec<Appointment>, AppointmentQueryError>;

    /// Non-cancelled appointments in `[from, to)`, oldest first.
    async fn list_for_doctor_between(
        &self,
        doctor_id: Uuid,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Appointment>, AppointmentQueryError>;

    /// Every appointment, newest first.
    async fn list_all(&self) -> Result<Vec<Appointment>, AppointmentQueryError>;

    async fn list_with_status(
        &self,
        statuses: &[AppointmentStatus],
    ) -> Result<Vec<Appointment>, AppointmentQueryError>;

    /// An empty `statuses` slice counts every appointment of the doctor.
    async fn count_for_doctor(
        &self,
        doctor_id: Uuid,
        statuses: &[AppointmentStatus],
    ) -> Result<u64, AppointmentQueryError>;

    async fn count_for_patient(&self, patient_id: Uuid) -> Result<u64, AppointmentQueryError>;

    async fn count_all(&self) -> Result<u64, AppointmentQueryError>;
}

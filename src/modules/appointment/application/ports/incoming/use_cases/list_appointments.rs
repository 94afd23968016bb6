use async_trait::async_trait;

use crate::appointment::application::domain::entities::AppointmentView;
use crate::auth::application::domain::entities::{Actor, UserId};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListAppointmentsError {
    #[error("Not allowed to view these appointments")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// A patient's appointments with the doctor attached. Open to the patient
/// and to admins.
#[async_trait]
pub trait ListPatientAppointmentsUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: Actor,
        patient_id: UserId,
    ) -> Result<Vec<AppointmentView>, ListAppointmentsError>;
}

/// A doctor's appointments with the patient attached. Open to the doctor
/// and to admins.
#[async_trait]
pub trait ListDoctorAppointmentsUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: Actor,
        doctor_id: UserId,
    ) -> Result<Vec<AppointmentView>, ListAppointmentsError>;
}

#[async_trait]
pub trait TodayAppointmentsUseCase: Send + Sync {
    async fn execute(&self, doctor_id: UserId)
        -> Result<Vec<AppointmentView>, ListAppointmentsError>;
}

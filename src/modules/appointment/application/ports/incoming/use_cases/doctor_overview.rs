use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::appointment::application::domain::entities::DoctorPatient;
use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Attendance {
    /// Completed appointments
    pub attendance: u64,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum DoctorOverviewError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DoctorAttendanceUseCase: Send + Sync {
    async fn execute(&self, doctor_id: UserId) -> Result<Attendance, DoctorOverviewError>;
}

/// Distinct patients seen or booked by a doctor, most recent visit first.
#[async_trait]
pub trait DoctorPatientsUseCase: Send + Sync {
    async fn execute(&self, doctor_id: UserId) -> Result<Vec<DoctorPatient>, DoctorOverviewError>;
}

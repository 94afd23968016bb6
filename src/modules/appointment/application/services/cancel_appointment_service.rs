use async_trait::async_trait;
use uuid::Uuid;

use crate::appointment::application::domain::entities::Appointment;
use crate::appointment::application::ports::incoming::use_cases::{
    CancelAppointmentError, CancelAppointmentUseCase,
};
use crate::appointment::application::ports::outgoing::{
    AppointmentQuery, AppointmentRepository, AppointmentRepositoryError,
};
use crate::auth::application::domain::entities::UserId;

pub struct CancelAppointmentService<Q, R>
where
    Q: AppointmentQuery,
    R: AppointmentRepository,
{
    appointment_query: Q,
    appointment_repository: R,
}

impl<Q, R> CancelAppointmentService<Q, R>
where
    Q: AppointmentQuery,
    R: AppointmentRepository,
{
    pub fn new(appointment_query: Q, appointment_repository: R) -> Self {
        Self {
            appointment_query,
            appointment_repository,
        }
    }
}

#[async_trait]
impl<Q, R> CancelAppointmentUseCase for CancelAppointmentService<Q, R>
where
    Q: AppointmentQuery + Send + Sync,
    R: AppointmentRepository + Send + Sync,
{
    async fn execute(
        &self,
        patient_id: UserId,
        appointment_id: Uuid,
    ) -> Result<Appointment, CancelAppointmentError> {
        let appointment = self
            .appointment_query
            .find_by_id(appointment_id)
            .await
            .map_err(|e| CancelAppointmentError::RepositoryError(e.to_string()))?
            .ok_or(CancelAppointmentError::NotFound)?;

        if appointment.patient_id != patient_id.value() {
            return Err(CancelAppointmentError::NotOwner);
        }

        if !appointment.can_cancel() {
            return Err(CancelAppointmentError::InvalidStatus(appointment.status));
        }

        let cancelled = self
            .appointment_repository
            .cancel(appointment_id)
            .await
            .map_err(|e| match e {
                AppointmentRepositoryError::NotFound => CancelAppointmentError::NotFound,
                AppointmentRepositoryError::InvalidStatus(status) => {
                    CancelAppointmentError::InvalidStatus(status)
                }
                other => CancelAppointmentError::RepositoryError(other.to_string()),
            })?;

        tracing::info!(appointment_id = %appointment_id, "Appointment cancelled");

        Ok(cancelled)
    }
}

use async_trait::async_trait;

use crate::appointment::application::ports::incoming::use_cases::{
    CloseAppointmentCommand, CloseAppointmentError, CloseAppointmentUseCase, ClosedAppointment,
};
use crate::appointment::application::ports::outgoing::{
    AppointmentQuery, AppointmentRepository, AppointmentRepositoryError,
};
use crate::auth::application::domain::entities::UserId;
use crate::medical_record::application::domain::entities::NewMedicalRecord;

pub struct CloseAppointmentService<Q, R>
where
    Q: AppointmentQuery,
    R: AppointmentRepository,
{
    appointment_query: Q,
    appointment_repository: R,
}

impl<Q, R> CloseAppointmentService<Q, R>
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
impl<Q, R> CloseAppointmentUseCase for CloseAppointmentService<Q, R>
where
    Q: AppointmentQuery + Send + Sync,
    R: AppointmentRepository + Send + Sync,
{
    async fn execute(
        &self,
        doctor_id: UserId,
        command: CloseAppointmentCommand,
    ) -> Result<ClosedAppointment, CloseAppointmentError> {
        let appointment = self
            .appointment_query
            .find_by_id(command.appointment_id())
            .await
            .map_err(|e| CloseAppointmentError::RepositoryError(e.to_string()))?
            .filter(|a| a.doctor_id == doctor_id.value())
            .ok_or(CloseAppointmentError::NotFound)?;

        if !appointment.can_close() {
            return Err(CloseAppointmentError::InvalidStatus(appointment.status));
        }

        let record = NewMedicalRecord {
            patient_id: appointment.patient_id,
            doctor_id: appointment.doctor_id,
            appointment_id: Some(appointment.id),
            date: appointment.date,
            diagnosis: command.diagnosis().to_string(),
            symptoms: command.symptoms().cloned(),
            medications: command.medications().to_vec(),
            notes: command.notes().cloned(),
        };

        let (appointment, medical_record) = self
            .appointment_repository
            .complete_with_record(appointment.id, record)
            .await
            .map_err(|e| match e {
                AppointmentRepositoryError::NotFound => CloseAppointmentError::NotFound,
                AppointmentRepositoryError::InvalidStatus(status) => {
                    CloseAppointmentError::InvalidStatus(status)
                }
                other => CloseAppointmentError::RepositoryError(other.to_string()),
            })?;

        tracing::info!(
            appointment_id = %appointment.id,
            record_id = %medical_record.id,
            "Appointment closed"
        );

        Ok(ClosedAppointment {
            appointment,
            medical_record,
        })
    }
}

use async_trait::async_trait;
use uuid::Uuid;

use crate::appointment::application::domain::entities::{Appointment, Feedback};
use crate::appointment::application::ports::incoming::use_cases::{
    SubmitFeedbackError, SubmitFeedbackUseCase,
};
use crate::appointment::application::ports::outgoing::{
    AppointmentQuery, AppointmentRepository, AppointmentRepositoryError,
};
use crate::auth::application::domain::entities::UserId;

pub struct SubmitFeedbackService<Q, R>
where
    Q: AppointmentQuery,
    R: AppointmentRepository,
{
    appointment_query: Q,
    appointment_repository: R,
}

impl<Q, R> SubmitFeedbackService<Q, R>
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
impl<Q, R> SubmitFeedbackUseCase for SubmitFeedbackService<Q, R>
where
    Q: AppointmentQuery + Send + Sync,
    R: AppointmentRepository + Send + Sync,
{
    async fn execute(
        &self,
        patient_id: UserId,
        appointment_id: Uuid,
        feedback: Feedback,
    ) -> Result<Appointment, SubmitFeedbackError> {
        let appointment = self
            .appointment_query
            .find_by_id(appointment_id)
            .await
            .map_err(|e| SubmitFeedbackError::RepositoryError(e.to_string()))?
            .ok_or(SubmitFeedbackError::NotFound)?;

        if appointment.patient_id != patient_id.value() {
            return Err(SubmitFeedbackError::NotOwner);
        }

        // Resubmitting replaces the earlier feedback
        self.appointment_repository
            .set_feedback(appointment_id, feedback)
            .await
            .map_err(|e| match e {
                AppointmentRepositoryError::NotFound => SubmitFeedbackError::NotFound,
                other => SubmitFeedbackError::RepositoryError(other.to_string()),
            })
    }
}

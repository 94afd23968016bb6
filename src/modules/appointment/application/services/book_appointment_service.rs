use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::sync::Arc;

use crate::appointment::application::domain::entities::{AppointmentStatus, AppointmentView};
use crate::appointment::application::domain::slot_policy::{SlotError, SlotPolicy};
use crate::appointment::application::ports::incoming::use_cases::{
    BookAppointmentCommand, BookAppointmentError, BookAppointmentUseCase,
};
use crate::appointment::application::ports::outgoing::{
    AppointmentQuery, AppointmentRepository, AppointmentRepositoryError, NewAppointment,
};
use crate::auth::application::domain::entities::{Role, UserId};
use crate::auth::application::ports::outgoing::{UserQuery, UserQueryResult};

pub struct BookAppointmentService<Q, R>
where
    Q: AppointmentQuery,
    R: AppointmentRepository,
{
    appointment_query: Q,
    appointment_repository: R,
    user_query: Arc<dyn UserQuery>,
    policy: SlotPolicy,
}

impl<Q, R> BookAppointmentService<Q, R>
where
    Q: AppointmentQuery,
    R: AppointmentRepository,
{
    pub fn new(
        appointment_query: Q,
        appointment_repository: R,
        user_query: Arc<dyn UserQuery>,
        policy: SlotPolicy,
    ) -> Self {
        Self {
            appointment_query,
            appointment_repository,
            user_query,
            policy,
        }
    }

    async fn find_with_role(
        &self,
        user_id: UserId,
        role: Role,
    ) -> Result<Option<UserQueryResult>, BookAppointmentError> {
        let user = self
            .user_query
            .find_by_id(user_id)
            .await
            .map_err(|e| BookAppointmentError::RepositoryError(e.to_string()))?;

        Ok(user.filter(|u| u.role == role))
    }
}

#[async_trait]
impl<Q, R> BookAppointmentUseCase for BookAppointmentService<Q, R>
where
    Q: AppointmentQuery + Send + Sync,
    R: AppointmentRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: BookAppointmentCommand,
    ) -> Result<AppointmentView, BookAppointmentError> {
        self.policy
            .validate_booking(command.date, Utc::now())
            .map_err(|e| match e {
                SlotError::OutsideBusinessHours => BookAppointmentError::OutsideBusinessHours,
                SlotError::InPast => BookAppointmentError::InPast,
            })?;

        let doctor = self
            .find_with_role(command.doctor_id, Role::Doctor)
            .await?
            .ok_or(BookAppointmentError::DoctorNotFound)?;

        let patient = self
            .find_with_role(command.patient_id, Role::Patient)
            .await?
            .ok_or(BookAppointmentError::PatientNotFound)?;

        let held = self
            .appointment_query
            .list_for_doctor_between(
                doctor.id,
                command.date,
                command.date + Duration::minutes(1),
            )
            .await
            .map_err(|e| BookAppointmentError::RepositoryError(e.to_string()))?;

        if !held.is_empty() {
            return Err(BookAppointmentError::SlotTaken);
        }

        // The partial unique index catches a concurrent booking of the same slot
        let appointment = self
            .appointment_repository
            .insert(NewAppointment {
                patient_id: patient.id,
                doctor_id: doctor.id,
                date: command.date,
                status: AppointmentStatus::Booked,
            })
            .await
            .map_err(|e| match e {
                AppointmentRepositoryError::SlotTaken => BookAppointmentError::SlotTaken,
                other => BookAppointmentError::RepositoryError(other.to_string()),
            })?;

        tracing::info!(
            appointment_id = %appointment.id,
            doctor_id = %doctor.id,
            patient_id = %patient.id,
            "Appointment booked"
        );

        Ok(AppointmentView {
            appointment,
            patient: Some(patient.to_summary()),
            doctor: Some(doctor.to_summary()),
        })
    }
}

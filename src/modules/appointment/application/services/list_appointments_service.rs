use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

use crate::appointment::application::domain::entities::{Appointment, AppointmentView};
use crate::appointment::application::domain::slot_policy::SlotPolicy;
use crate::appointment::application::ports::incoming::use_cases::{
    ListAppointmentsError, ListDoctorAppointmentsUseCase, ListPatientAppointmentsUseCase,
    TodayAppointmentsUseCase,
};
use crate::appointment::application::ports::outgoing::AppointmentQuery;
use crate::auth::application::domain::entities::{Actor, UserId};
use crate::auth::application::ports::outgoing::UserQuery;
use crate::auth::application::services::user_summaries::UserSummaries;

fn repo_error(e: impl ToString) -> ListAppointmentsError {
    ListAppointmentsError::RepositoryError(e.to_string())
}

async fn with_doctors(
    users: &dyn UserQuery,
    appointments: Vec<Appointment>,
) -> Result<Vec<AppointmentView>, ListAppointmentsError> {
    let doctors = UserSummaries::load(users, appointments.iter().map(|a| a.doctor_id))
        .await
        .map_err(repo_error)?;

    Ok(appointments
        .into_iter()
        .map(|a| AppointmentView {
            doctor: doctors.get(a.doctor_id),
            ..AppointmentView::bare(a)
        })
        .collect())
}

async fn with_patients(
    users: &dyn UserQuery,
    appointments: Vec<Appointment>,
) -> Result<Vec<AppointmentView>, ListAppointmentsError> {
    let patients = UserSummaries::load(users, appointments.iter().map(|a| a.patient_id))
        .await
        .map_err(repo_error)?;

    Ok(appointments
        .into_iter()
        .map(|a| AppointmentView {
            patient: patients.get(a.patient_id),
            ..AppointmentView::bare(a)
        })
        .collect())
}

// ──────────────────────────────────────────────────────────
// Patient
// ──────────────────────────────────────────────────────────

pub struct ListPatientAppointmentsService<Q>
where
    Q: AppointmentQuery,
{
    appointment_query: Q,
    user_query: Arc<dyn UserQuery>,
}

impl<Q> ListPatientAppointmentsService<Q>
where
    Q: AppointmentQuery,
{
    pub fn new(appointment_query: Q, user_query: Arc<dyn UserQuery>) -> Self {
        Self {
            appointment_query,
            user_query,
        }
    }
}

#[async_trait]
impl<Q> ListPatientAppointmentsUseCase for ListPatientAppointmentsService<Q>
where
    Q: AppointmentQuery + Send + Sync,
{
    async fn execute(
        &self,
        actor: Actor,
        patient_id: UserId,
    ) -> Result<Vec<AppointmentView>, ListAppointmentsError> {
        if !actor.is_self(patient_id) && !actor.is_admin() {
            return Err(ListAppointmentsError::Forbidden);
        }

        let appointments = self
            .appointment_query
            .list_for_patient(patient_id.value())
            .await
            .map_err(repo_error)?;

        with_doctors(self.user_query.as_ref(), appointments).await
    }
}

// ──────────────────────────────────────────────────────────
// Doctor
// ──────────────────────────────────────────────────────────

pub struct ListDoctorAppointmentsService<Q>
where
    Q: AppointmentQuery,
{
    appointment_query: Q,
    user_query: Arc<dyn UserQuery>,
}

impl<Q> ListDoctorAppointmentsService<Q>
where
    Q: AppointmentQuery,
{
    pub fn new(appointment_query: Q, user_query: Arc<dyn UserQuery>) -> Self {
        Self {
            appointment_query,
            user_query,
        }
    }
}

#[async_trait]
impl<Q> ListDoctorAppointmentsUseCase for ListDoctorAppointmentsService<Q>
where
    Q: AppointmentQuery + Send + Sync,
{
    async fn execute(
        &self,
        actor: Actor,
        doctor_id: UserId,
    ) -> Result<Vec<AppointmentView>, ListAppointmentsError> {
        if !actor.is_self(doctor_id) && !actor.is_admin() {
            return Err(ListAppointmentsError::Forbidden);
        }

        let appointments = self
            .appointment_query
            .list_for_doctor(doctor_id.value())
            .await
            .map_err(repo_error)?;

        with_patients(self.user_query.as_ref(), appointments).await
    }
}

// ──────────────────────────────────────────────────────────
// Today
// ──────────────────────────────────────────────────────────

pub struct TodayAppointmentsService<Q>
where
    Q: AppointmentQuery,
{
    appointment_query: Q,
    user_query: Arc<dyn UserQuery>,
    policy: SlotPolicy,
}

impl<Q> TodayAppointmentsService<Q>
where
    Q: AppointmentQuery,
{
    pub fn new(appointment_query: Q, user_query: Arc<dyn UserQuery>, policy: SlotPolicy) -> Self {
        Self {
            appointment_query,
            user_query,
            policy,
        }
    }
}

#[async_trait]
impl<Q> TodayAppointmentsUseCase for TodayAppointmentsService<Q>
where
    Q: AppointmentQuery + Send + Sync,
{
    async fn execute(
        &self,
        doctor_id: UserId,
    ) -> Result<Vec<AppointmentView>, ListAppointmentsError> {
        let (from, to) = self.policy.day_bounds(self.policy.today(Utc::now()));

        let appointments = self
            .appointment_query
            .list_for_doctor_between(doctor_id.value(), from, to)
            .await
            .map_err(repo_error)?;

        with_patients(self.user_query.as_ref(), appointments).await
    }
}

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::appointment::application::domain::entities::{AppointmentStatus, DoctorPatient};
use crate::appointment::application::ports::incoming::use_cases::{
    Attendance, DoctorAttendanceUseCase, DoctorOverviewError, DoctorPatientsUseCase,
};
use crate::appointment::application::ports::outgoing::AppointmentQuery;
use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::UserQuery;
use crate::auth::application::services::user_summaries::UserSummaries;

pub struct DoctorAttendanceService<Q>
where
    Q: AppointmentQuery,
{
    appointment_query: Q,
}

impl<Q> DoctorAttendanceService<Q>
where
    Q: AppointmentQuery,
{
    pub fn new(appointment_query: Q) -> Self {
        Self { appointment_query }
    }
}

#[async_trait]
impl<Q> DoctorAttendanceUseCase for DoctorAttendanceService<Q>
where
    Q: AppointmentQuery + Send + Sync,
{
    async fn execute(&self, doctor_id: UserId) -> Result<Attendance, DoctorOverviewError> {
        let attendance = self
            .appointment_query
            .count_for_doctor(doctor_id.value(), &[AppointmentStatus::Completed])
            .await
            .map_err(|e| DoctorOverviewError::RepositoryError(e.to_string()))?;

        Ok(Attendance { attendance })
    }
}

pub struct DoctorPatientsService<Q>
where
    Q: AppointmentQuery,
{
    appointment_query: Q,
    user_query: Arc<dyn UserQuery>,
}

impl<Q> DoctorPatientsService<Q>
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
impl<Q> DoctorPatientsUseCase for DoctorPatientsService<Q>
where
    Q: AppointmentQuery + Send + Sync,
{
    async fn execute(&self, doctor_id: UserId) -> Result<Vec<DoctorPatient>, DoctorOverviewError> {
        let appointments = self
            .appointment_query
            .list_for_doctor(doctor_id.value())
            .await
            .map_err(|e| DoctorOverviewError::RepositoryError(e.to_string()))?;

        let mut visits: HashMap<Uuid, (u64, DateTime<Utc>)> = HashMap::new();
        for appt in appointments
            .iter()
            .filter(|a| a.status != AppointmentStatus::Cancelled)
        {
            let entry = visits.entry(appt.patient_id).or_insert((0, appt.date));
            entry.0 += 1;
            entry.1 = entry.1.max(appt.date);
        }

        let summaries = UserSummaries::load(self.user_query.as_ref(), visits.keys().copied())
            .await
            .map_err(|e| DoctorOverviewError::RepositoryError(e.to_string()))?;

        let mut patients: Vec<DoctorPatient> = visits
            .into_iter()
            .filter_map(|(id, (visit_count, last_visit))| {
                summaries.get(id).map(|patient| DoctorPatient {
                    patient,
                    visit_count,
                    last_visit,
                })
            })
            .collect();
        patients.sort_by(|a, b| b.last_visit.cmp(&a.last_visit));

        Ok(patients)
    }
}

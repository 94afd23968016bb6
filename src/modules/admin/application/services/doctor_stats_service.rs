use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use uuid::Uuid;

use crate::admin::application::domain::entities::{DoctorWithStats, DoctorWorkload};
use crate::admin::application::ports::incoming::use_cases::{
    DoctorStatsError, ListDoctorsWithStatsUseCase,
};
use crate::appointment::application::domain::entities::{Appointment, AppointmentStatus};
use crate::appointment::application::domain::slot_policy::SlotPolicy;
use crate::appointment::application::ports::outgoing::AppointmentQuery;
use crate::auth::application::domain::entities::Role;
use crate::auth::application::ports::outgoing::UserQuery;

fn repo_error(e: impl ToString) -> DoctorStatsError {
    DoctorStatsError::RepositoryError(e.to_string())
}

const COUNTED: [AppointmentStatus; 2] = [AppointmentStatus::Booked, AppointmentStatus::Completed];

fn workload(appointments: &[&Appointment], today: (DateTime<Utc>, DateTime<Utc>)) -> DoctorWorkload {
    let (start, end) = today;
    let todays: Vec<_> = appointments
        .iter()
        .filter(|a| a.date >= start && a.date < end)
        .collect();

    DoctorWorkload {
        appointments_today: todays.len() as u64,
        total_appointments: appointments.len() as u64,
        patients_today: todays
            .iter()
            .map(|a| a.patient_id)
            .collect::<HashSet<_>>()
            .len() as u64,
        total_patients: appointments
            .iter()
            .map(|a| a.patient_id)
            .collect::<HashSet<_>>()
            .len() as u64,
    }
}

pub struct DoctorStatsService {
    user_query: Arc<dyn UserQuery>,
    appointment_query: Arc<dyn AppointmentQuery>,
    policy: SlotPolicy,
}

impl DoctorStatsService {
    pub fn new(
        user_query: Arc<dyn UserQuery>,
        appointment_query: Arc<dyn AppointmentQuery>,
        policy: SlotPolicy,
    ) -> Self {
        Self {
            user_query,
            appointment_query,
            policy,
        }
    }
}

#[async_trait]
impl ListDoctorsWithStatsUseCase for DoctorStatsService {
    async fn execute(&self) -> Result<Vec<DoctorWithStats>, DoctorStatsError> {
        let doctors = self
            .user_query
            .list_users(Some(Role::Doctor))
            .await
            .map_err(repo_error)?;

        let appointments = self
            .appointment_query
            .list_with_status(&COUNTED)
            .await
            .map_err(repo_error)?;

        let mut by_doctor: HashMap<Uuid, Vec<&Appointment>> = HashMap::new();
        for appointment in &appointments {
            by_doctor
                .entry(appointment.doctor_id)
                .or_default()
                .push(appointment);
        }

        let today = self.policy.day_bounds(self.policy.today(Utc::now()));

        Ok(doctors
            .iter()
            .map(|doctor| DoctorWithStats {
                profile: doctor.to_profile(),
                workload: by_doctor
                    .get(&doctor.id)
                    .map(|list| workload(list, today))
                    .unwrap_or_default(),
            })
            .collect())
    }
}

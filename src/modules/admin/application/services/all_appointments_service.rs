use async_trait::async_trait;
use std::sync::Arc;

use crate::admin::application::ports::incoming::use_cases::{
    AllAppointmentsError, AllAppointmentsUseCase,
};
use crate::appointment::application::domain::entities::AppointmentView;
use crate::appointment::application::ports::outgoing::AppointmentQuery;
use crate::auth::application::ports::outgoing::UserQuery;
use crate::auth::application::services::user_summaries::UserSummaries;

pub struct AllAppointmentsService {
    appointment_query: Arc<dyn AppointmentQuery>,
    user_query: Arc<dyn UserQuery>,
}

impl AllAppointmentsService {
    pub fn new(appointment_query: Arc<dyn AppointmentQuery>, user_query: Arc<dyn UserQuery>) -> Self {
        Self {
            appointment_query,
            user_query,
        }
    }
}

#[async_trait]
impl AllAppointmentsUseCase for AllAppointmentsService {
    async fn execute(&self) -> Result<Vec<AppointmentView>, AllAppointmentsError> {
        let appointments = self
            .appointment_query
            .list_all()
            .await
            .map_err(|e| AllAppointmentsError::RepositoryError(e.to_string()))?;

        let people = UserSummaries::load(
            self.user_query.as_ref(),
            appointments
                .iter()
                .flat_map(|a| [a.patient_id, a.doctor_id]),
        )
        .await
        .map_err(|e| AllAppointmentsError::RepositoryError(e.to_string()))?;

        Ok(appointments
            .into_iter()
            .map(|a| AppointmentView {
                patient: people.get(a.patient_id),
                doctor: people.get(a.doctor_id),
                appointment: a,
            })
            .collect())
    }
}

use async_trait::async_trait;
use std::sync::Arc;

use crate::admin::application::domain::entities::HospitalStats;
use crate::admin::application::ports::incoming::use_cases::{
    HospitalStatsError, HospitalStatsUseCase,
};
use crate::appointment::application::ports::outgoing::AppointmentQuery;
use crate::auth::application::domain::entities::Role;
use crate::auth::application::ports::outgoing::UserQuery;

fn repo_error(e: impl ToString) -> HospitalStatsError {
    HospitalStatsError::RepositoryError(e.to_string())
}

pub struct HospitalStatsService {
    user_query: Arc<dyn UserQuery>,
    appointment_query: Arc<dyn AppointmentQuery>,
}

impl HospitalStatsService {
    pub fn new(user_query: Arc<dyn UserQuery>, appointment_query: Arc<dyn AppointmentQuery>) -> Self {
        Self {
            user_query,
            appointment_query,
        }
    }
}

#[async_trait]
impl HospitalStatsUseCase for HospitalStatsService {
    async fn execute(&self) -> Result<HospitalStats, HospitalStatsError> {
        let (total_patients, total_doctors, total_appointments) = tokio::try_join!(
            async {
                self.user_query
                    .count_by_role(Role::Patient)
                    .await
                    .map_err(repo_error)
            },
            async {
                self.user_query
                    .count_by_role(Role::Doctor)
                    .await
                    .map_err(repo_error)
            },
            async { self.appointment_query.count_all().await.map_err(repo_error) },
        )?;

        Ok(HospitalStats {
            total_patients,
            total_doctors,
            total_appointments,
        })
    }
}

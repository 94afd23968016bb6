use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

use crate::appointment::application::domain::slot_policy::SlotPolicy;
use crate::appointment::application::ports::incoming::use_cases::{
    AvailableSlotsError, GetAvailableSlotsUseCase,
};
use crate::appointment::application::ports::outgoing::AppointmentQuery;
use crate::auth::application::domain::entities::UserId;

pub struct GetAvailableSlotsService<Q>
where
    Q: AppointmentQuery,
{
    appointment_query: Q,
    policy: SlotPolicy,
}

impl<Q> GetAvailableSlotsService<Q>
where
    Q: AppointmentQuery,
{
    pub fn new(appointment_query: Q, policy: SlotPolicy) -> Self {
        Self {
            appointment_query,
            policy,
        }
    }
}

#[async_trait]
impl<Q> GetAvailableSlotsUseCase for GetAvailableSlotsService<Q>
where
    Q: AppointmentQuery + Send + Sync,
{
    async fn execute(
        &self,
        doctor_id: UserId,
        day: NaiveDate,
    ) -> Result<Vec<DateTime<Utc>>, AvailableSlotsError> {
        if self.policy.slots_for(day).is_empty() {
            return Ok(Vec::new());
        }

        let (from, to) = self.policy.day_bounds(day);
        let taken: Vec<DateTime<Utc>> = self
            .appointment_query
            .list_for_doctor_between(doctor_id.value(), from, to)
            .await
            .map_err(|e| AvailableSlotsError::RepositoryError(e.to_string()))?
            .into_iter()
            .map(|a| a.date)
            .collect();

        Ok(self.policy.available_slots(day, &taken, Utc::now()))
    }
}

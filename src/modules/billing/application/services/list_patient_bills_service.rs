use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::appointment::application::ports::outgoing::AppointmentQuery;
use crate::auth::application::domain::entities::{Actor, UserId};
use crate::auth::application::ports::outgoing::UserQuery;
use crate::auth::application::services::user_summaries::UserSummaries;
use crate::billing::application::domain::entities::{BillStatus, BillView};
use crate::billing::application::ports::incoming::use_cases::{
    ListPatientBillsError, ListPatientBillsUseCase,
};
use crate::billing::application::ports::outgoing::{BillQuery, BillRepository};

fn repo_error(e: impl ToString) -> ListPatientBillsError {
    ListPatientBillsError::RepositoryError(e.to_string())
}

pub struct ListPatientBillsService<Q, R>
where
    Q: BillQuery,
    R: BillRepository,
{
    bill_query: Q,
    bill_repository: R,
    appointment_query: Arc<dyn AppointmentQuery>,
    user_query: Arc<dyn UserQuery>,
}

impl<Q, R> ListPatientBillsService<Q, R>
where
    Q: BillQuery,
    R: BillRepository,
{
    pub fn new(
        bill_query: Q,
        bill_repository: R,
        appointment_query: Arc<dyn AppointmentQuery>,
        user_query: Arc<dyn UserQuery>,
    ) -> Self {
        Self {
            bill_query,
            bill_repository,
            appointment_query,
            user_query,
        }
    }
}

#[async_trait]
impl<Q, R> ListPatientBillsUseCase for ListPatientBillsService<Q, R>
where
    Q: BillQuery + Send + Sync,
    R: BillRepository + Send + Sync,
{
    async fn execute(
        &self,
        actor: Actor,
        patient_id: UserId,
    ) -> Result<Vec<BillView>, ListPatientBillsError> {
        if !actor.is_self(patient_id) && !actor.is_admin() {
            return Err(ListPatientBillsError::Forbidden);
        }

        let mut bills = self
            .bill_query
            .list_for_patient(patient_id.value())
            .await
            .map_err(repo_error)?;

        let now = Utc::now();
        let overdue: Vec<Uuid> = bills
            .iter()
            .filter(|b| b.is_overdue_at(now))
            .map(|b| b.id)
            .collect();

        if !overdue.is_empty() {
            let changed = self
                .bill_repository
                .mark_overdue(overdue.clone())
                .await
                .map_err(repo_error)?;

            tracing::info!(%patient_id, changed, "Marked bills overdue");

            for bill in bills.iter_mut().filter(|b| overdue.contains(&b.id)) {
                bill.status = BillStatus::Overdue;
            }
        }

        let appointments: HashMap<Uuid, _> = self
            .appointment_query
            .list_for_patient(patient_id.value())
            .await
            .map_err(repo_error)?
            .into_iter()
            .map(|a| (a.id, a))
            .collect();

        let doctors = UserSummaries::load(
            self.user_query.as_ref(),
            appointments.values().map(|a| a.doctor_id),
        )
        .await
        .map_err(repo_error)?;

        Ok(bills
            .into_iter()
            .map(|bill| {
                let appointment = appointments.get(&bill.appointment_id);
                BillView {
                    appointment_date: appointment.map(|a| a.date),
                    doctor: appointment.and_then(|a| doctors.get(a.doctor_id)),
                    bill,
                }
            })
            .collect())
    }
}

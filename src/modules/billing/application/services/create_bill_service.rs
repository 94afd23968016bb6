use async_trait::async_trait;
use std::sync::Arc;

use crate::appointment::application::ports::outgoing::AppointmentQuery;
use crate::billing::application::domain::entities::Bill;
use crate::billing::application::ports::incoming::use_cases::{
    CreateBillCommand, CreateBillError, CreateBillUseCase,
};
use crate::billing::application::ports::outgoing::{BillRepository, NewBill};

pub struct CreateBillService<R>
where
    R: BillRepository,
{
    bill_repository: R,
    appointment_query: Arc<dyn AppointmentQuery>,
}

impl<R> CreateBillService<R>
where
    R: BillRepository,
{
    pub fn new(bill_repository: R, appointment_query: Arc<dyn AppointmentQuery>) -> Self {
        Self {
            bill_repository,
            appointment_query,
        }
    }
}

#[async_trait]
impl<R> CreateBillUseCase for CreateBillService<R>
where
    R: BillRepository + Send + Sync,
{
    async fn execute(&self, command: CreateBillCommand) -> Result<Bill, CreateBillError> {
        let appointment = self
            .appointment_query
            .find_by_id(command.appointment_id())
            .await
            .map_err(|e| CreateBillError::RepositoryError(e.to_string()))?
            .ok_or(CreateBillError::AppointmentNotFound)?;

        let bill = self
            .bill_repository
            .insert(NewBill {
                patient_id: appointment.patient_id,
                appointment_id: appointment.id,
                description: command.description().to_string(),
                amount_cents: command.amount_cents(),
                due_date: command.due_date(),
            })
            .await
            .map_err(|e| CreateBillError::RepositoryError(e.to_string()))?;

        tracing::info!(
            bill_id = %bill.id,
            appointment_id = %appointment.id,
            patient_id = %bill.patient_id,
            "Bill created"
        );

        Ok(bill)
    }
}

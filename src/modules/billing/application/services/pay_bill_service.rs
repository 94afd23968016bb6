use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::billing::application::domain::entities::{Bill, BillStatus};
use crate::billing::application::ports::incoming::use_cases::{PayBillError, PayBillUseCase};
use crate::billing::application::ports::outgoing::{
    BillQuery, BillRepository, BillRepositoryError,
};

pub struct PayBillService<Q, R>
where
    Q: BillQuery,
    R: BillRepository,
{
    bill_query: Q,
    bill_repository: R,
}

impl<Q, R> PayBillService<Q, R>
where
    Q: BillQuery,
    R: BillRepository,
{
    pub fn new(bill_query: Q, bill_repository: R) -> Self {
        Self {
            bill_query,
            bill_repository,
        }
    }
}

#[async_trait]
impl<Q, R> PayBillUseCase for PayBillService<Q, R>
where
    Q: BillQuery + Send + Sync,
    R: BillRepository + Send + Sync,
{
    async fn execute(&self, patient_id: UserId, bill_id: Uuid) -> Result<Bill, PayBillError> {
        let bill = self
            .bill_query
            .find_by_id(bill_id)
            .await
            .map_err(|e| PayBillError::RepositoryError(e.to_string()))?
            .ok_or(PayBillError::NotFound)?;

        if bill.patient_id != patient_id.value() {
            return Err(PayBillError::NotOwner);
        }

        if bill.status == BillStatus::Paid {
            return Err(PayBillError::AlreadyPaid);
        }

        let paid = self
            .bill_repository
            .mark_paid(bill_id, Utc::now())
            .await
            .map_err(|e| match e {
                BillRepositoryError::NotFound => PayBillError::NotFound,
                BillRepositoryError::AlreadyPaid => PayBillError::AlreadyPaid,
                other => PayBillError::RepositoryError(other.to_string()),
            })?;

        tracing::info!(%bill_id, %patient_id, amount_cents = paid.amount_cents, "Bill paid");

        Ok(paid)
    }
}

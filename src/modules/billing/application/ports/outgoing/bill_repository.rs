use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::billing::application::domain::entities::Bill;

#[derive(Debug, Clone)]
pub struct NewBill {
    pub patient_id: Uuid,
    pub appointment_id: Uuid,
    pub description: String,
    pub amount_cents: i64,
    pub due_date: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum BillRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Bill not found")]
    NotFound,

    #[error("Bill already paid")]
    AlreadyPaid,
}

#[async_trait]
pub trait BillRepository: Send + Sync {
    /// New bills start out pending.
    async fn insert(&self, data: NewBill) -> Result<Bill, BillRepositoryError>;

    /// Flags still-pending bills among `bill_ids` as overdue. Returns the number changed.
    async fn mark_overdue(&self, bill_ids: Vec<Uuid>) -> Result<u64, BillRepositoryError>;

    /// Pays a bill that is not yet paid; `AlreadyPaid` if another payment won.
    async fn mark_paid(
        &self,
        bill_id: Uuid,
        paid_at: DateTime<Utc>,
    ) -> Result<Bill, BillRepositoryError>;
}

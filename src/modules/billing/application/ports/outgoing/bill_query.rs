use async_trait::async_trait;
use uuid::Uuid;

use crate::billing::application::domain::entities::Bill;

#[derive(Debug, Clone, thiserror::Error)]
pub enum BillQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Corrupted bill row: {0}")]
    CorruptedRow(String),
}

#[async_trait]
pub trait BillQuery: Send + Sync {
    async fn find_by_id(&self, bill_id: Uuid) -> Result<Option<Bill>, BillQueryError>;

    /// Latest due date first.
    async fn list_for_patient(&self, patient_id: Uuid) -> Result<Vec<Bill>, BillQueryError>;
}

use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::billing::application::domain::entities::Bill;

#[derive(Debug, Clone, thiserror::Error)]
pub enum PayBillError {
    #[error("Bill not found")]
    NotFound,

    #[error("Not authorized to pay this bill")]
    NotOwner,

    #[error("This bill has already been paid")]
    AlreadyPaid,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait PayBillUseCase: Send + Sync {
    async fn execute(&self, patient_id: UserId, bill_id: Uuid) -> Result<Bill, PayBillError>;
}

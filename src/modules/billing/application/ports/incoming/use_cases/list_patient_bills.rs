use async_trait::async_trait;

use crate::auth::application::domain::entities::{Actor, UserId};
use crate::billing::application::domain::entities::BillView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListPatientBillsError {
    #[error("Not authorized to view these bills")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// A patient's bills with overdue status brought up to date. Readable by the
/// patient and admins.
#[async_trait]
pub trait ListPatientBillsUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: Actor,
        patient_id: UserId,
    ) -> Result<Vec<BillView>, ListPatientBillsError>;
}

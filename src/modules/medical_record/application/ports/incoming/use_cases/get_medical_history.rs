use async_trait::async_trait;

use crate::auth::application::domain::entities::{Actor, UserId};
use crate::medical_record::application::domain::entities::MedicalRecordView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetMedicalHistoryError {
    #[error("Not authorized to view this medical history")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// A patient's records, newest first, with the authoring doctor.
/// Readable by the patient, any doctor and admins.
#[async_trait]
pub trait GetMedicalHistoryUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: Actor,
        patient_id: UserId,
    ) -> Result<Vec<MedicalRecordView>, GetMedicalHistoryError>;
}

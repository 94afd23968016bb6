use async_trait::async_trait;
use uuid::Uuid;

use crate::medical_record::application::domain::entities::MedicalRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum MedicalRecordQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Corrupted medical record row: {0}")]
    CorruptedRow(String),
}

#[async_trait]
pub trait MedicalRecordQuery: Send + Sync {
    /// Newest first.
    async fn list_for_patient(
        &self,
        patient_id: Uuid,
    ) -> Result<Vec<MedicalRecord>, MedicalRecordQueryError>;

    async fn count_for_patient(&self, patient_id: Uuid) -> Result<u64, MedicalRecordQueryError>;
}

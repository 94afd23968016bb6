use async_trait::async_trait;

use crate::medical_record::application::domain::entities::{MedicalRecord, NewMedicalRecord};

#[derive(Debug, Clone, thiserror::Error)]
pub enum MedicalRecordRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait MedicalRecordRepository: Send + Sync {
    async fn insert(
        &self,
        record: NewMedicalRecord,
    ) -> Result<MedicalRecord, MedicalRecordRepositoryError>;
}

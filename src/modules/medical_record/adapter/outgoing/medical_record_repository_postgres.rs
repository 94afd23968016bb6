use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection};
use std::sync::Arc;

use crate::medical_record::application::domain::entities::{MedicalRecord, NewMedicalRecord};
use crate::medical_record::application::ports::outgoing::medical_record_repository::{
    MedicalRecordRepository, MedicalRecordRepositoryError,
};

use super::sea_orm_entity::medical_records::ActiveModel as RecordActiveModel;

#[derive(Clone, Debug)]
pub struct MedicalRecordRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl MedicalRecordRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MedicalRecordRepository for MedicalRecordRepositoryPostgres {
    async fn insert(
        &self,
        record: NewMedicalRecord,
    ) -> Result<MedicalRecord, MedicalRecordRepositoryError> {
        let inserted = RecordActiveModel::from_new(record)
            .insert(&*self.db)
            .await
            .map_err(|e| MedicalRecordRepositoryError::DatabaseError(e.to_string()))?;

        inserted
            .to_domain()
            .map_err(MedicalRecordRepositoryError::DatabaseError)
    }
}

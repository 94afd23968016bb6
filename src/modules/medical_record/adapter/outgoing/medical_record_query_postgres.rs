use super::sea_orm_entity::medical_records::{
    Column as RecordColumn, Entity as RecordEntity,
};
use crate::medical_record::application::domain::entities::MedicalRecord;
use crate::medical_record::application::ports::outgoing::medical_record_query::{
    MedicalRecordQuery, MedicalRecordQueryError,
};
use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone, Debug)]
pub struct MedicalRecordQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl MedicalRecordQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MedicalRecordQuery for MedicalRecordQueryPostgres {
    async fn list_for_patient(
        &self,
        patient_id: Uuid,
    ) -> Result<Vec<MedicalRecord>, MedicalRecordQueryError> {
        let rows = RecordEntity::find()
            .filter(RecordColumn::PatientId.eq(patient_id))
            .order_by_desc(RecordColumn::Date)
            .all(&*self.db)
            .await
            .map_err(|e| MedicalRecordQueryError::DatabaseError(e.to_string()))?;

        rows.into_iter()
            .map(|m| m.to_domain().map_err(MedicalRecordQueryError::CorruptedRow))
            .collect()
    }

    async fn count_for_patient(&self, patient_id: Uuid) -> Result<u64, MedicalRecordQueryError> {
        RecordEntity::find()
            .filter(RecordColumn::PatientId.eq(patient_id))
            .count(&*self.db)
            .await
            .map_err(|e| MedicalRecordQueryError::DatabaseError(e.to_string()))
    }
}

use super::sea_orm_entity::bills::{Column as BillColumn, Entity as BillEntity};
use crate::billing::application::domain::entities::Bill;
use crate::billing::application::ports::outgoing::bill_query::{BillQuery, BillQueryError};
use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone, Debug)]
pub struct BillQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl BillQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BillQuery for BillQueryPostgres {
    async fn find_by_id(&self, bill_id: Uuid) -> Result<Option<Bill>, BillQueryError> {
        let model = BillEntity::find_by_id(bill_id)
            .one(&*self.db)
            .await
            .map_err(|e| BillQueryError::DatabaseError(e.to_string()))?;

        model
            .map(|m| m.to_domain().map_err(BillQueryError::CorruptedRow))
            .transpose()
    }

    async fn list_for_patient(&self, patient_id: Uuid) -> Result<Vec<Bill>, BillQueryError> {
        let rows = BillEntity::find()
            .filter(BillColumn::PatientId.eq(patient_id))
            .order_by_desc(BillColumn::DueDate)
            .all(&*self.db)
            .await
            .map_err(|e| BillQueryError::DatabaseError(e.to_string()))?;

        rows.into_iter()
            .map(|m| m.to_domain().map_err(BillQueryError::CorruptedRow))
            .collect()
    }
}

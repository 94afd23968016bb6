use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QuerySelect, Set, TransactionTrait, UpdateMany,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::appointment::application::domain::entities::{
    Appointment, AppointmentStatus, Feedback,
};
use crate::appointment::application::ports::outgoing::appointment_repository::{
    AppointmentRepository, AppointmentRepositoryError, NewAppointment,
};
use crate::medical_record::adapter::outgoing::sea_orm_entity::medical_records::ActiveModel as MedicalRecordActiveModel;
use crate::medical_record::application::domain::entities::{MedicalRecord, NewMedicalRecord};

use super::sea_orm_entity::appointments::{
    ActiveModel as AppointmentActiveModel, Column as AppointmentColumn,
    Entity as AppointmentEntity, Model as AppointmentModel,
};

#[derive(Clone, Debug)]
pub struct AppointmentRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AppointmentRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> AppointmentRepositoryError {
        AppointmentRepositoryError::DatabaseError(e.to_string())
    }

    /// `idx_appointments_doctor_slot_active` guards one live booking per slot.
    fn map_insert_error(e: DbErr) -> AppointmentRepositoryError {
        let msg = e.to_string().to_lowercase();
        let is_unique = msg.contains("23505")
            || msg.contains("duplicate key")
            || msg.contains("unique constraint");

        if is_unique {
            AppointmentRepositoryError::SlotTaken
        } else {
            Self::map_db_err(e)
        }
    }

    fn to_domain(model: AppointmentModel) -> Result<Appointment, AppointmentRepositoryError> {
        model
            .to_domain()
            .map_err(AppointmentRepositoryError::DatabaseError)
    }

    fn open_status_names() -> Vec<&'static str> {
        AppointmentStatus::open().iter().map(|s| s.as_str()).collect()
    }

    /// Bulk updates skip `before_save`, so stamp `updated_at` here when no
    /// trigger does it.
    fn touch(update: UpdateMany<AppointmentEntity>) -> UpdateMany<AppointmentEntity> {
        #[cfg(feature = "no_db_triggers")]
        let update = update.col_expr(AppointmentColumn::UpdatedAt, Expr::cust("CURRENT_TIMESTAMP"));

        update
    }

    async fn find_model<C>(
        db: &C,
        appointment_id: Uuid,
        for_update: bool,
    ) -> Result<AppointmentModel, AppointmentRepositoryError>
    where
        C: ConnectionTrait,
    {
        let mut query = AppointmentEntity::find_by_id(appointment_id);
        if for_update {
            query = query.lock_exclusive();
        }

        query
            .one(db)
            .await
            .map_err(Self::map_db_err)?
            .ok_or(AppointmentRepositoryError::NotFound)
    }
}

#[async_trait]
impl AppointmentRepository for AppointmentRepositoryPostgres {
    async fn insert(&self, data: NewAppointment) -> Result<Appointment, AppointmentRepositoryError> {
        let active = AppointmentActiveModel {
            id: Set(Uuid::new_v4()),
            patient_id: Set(data.patient_id),
            doctor_id: Set(data.doctor_id),
            date: Set(data.date.into()),
            status: Set(data.status.as_str().to_string()),
            feedback: Set(None),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active
            .insert(&*self.db)
            .await
            .map_err(Self::map_insert_error)?;

        Self::to_domain(inserted)
    }

    async fn cancel(&self, appointment_id: Uuid) -> Result<Appointment, AppointmentRepositoryError> {
        let update = AppointmentEntity::update_many()
            .col_expr(
                AppointmentColumn::Status,
                Expr::value(AppointmentStatus::Cancelled.as_str()),
            )
            .filter(AppointmentColumn::Id.eq(appointment_id))
            .filter(AppointmentColumn::Status.is_in(Self::open_status_names()));

        let result = Self::touch(update)
            .exec(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        let model = Self::find_model(&*self.db, appointment_id, false).await?;
        let appointment = Self::to_domain(model)?;

        if result.rows_affected == 0 {
            return Err(AppointmentRepositoryError::InvalidStatus(appointment.status));
        }

        Ok(appointment)
    }

    async fn set_feedback(
        &self,
        appointment_id: Uuid,
        feedback: Feedback,
    ) -> Result<Appointment, AppointmentRepositoryError> {
        let model = Self::find_model(&*self.db, appointment_id, false).await?;

        let json = serde_json::to_value(&feedback)
            .map_err(|e| AppointmentRepositoryError::DatabaseError(e.to_string()))?;

        let mut active: AppointmentActiveModel = model.into();
        active.feedback = Set(Some(json));

        let updated = active.update(&*self.db).await.map_err(Self::map_db_err)?;
        Self::to_domain(updated)
    }

    async fn complete_with_record(
        &self,
        appointment_id: Uuid,
        record: NewMedicalRecord,
    ) -> Result<(Appointment, MedicalRecord), AppointmentRepositoryError> {
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        let model = match Self::find_model(&txn, appointment_id, true).await {
            Ok(m) => m,
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(e);
            }
        };

        // Another request may have cancelled or closed it since the caller's read
        match model.status.parse::<AppointmentStatus>() {
            Ok(status) if status.is_open() => {}
            Ok(status) => {
                let _ = txn.rollback().await;
                return Err(AppointmentRepositoryError::InvalidStatus(status));
            }
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(AppointmentRepositoryError::DatabaseError(e.to_string()));
            }
        }

        let mut active: AppointmentActiveModel = model.into();
        active.status = Set(AppointmentStatus::Completed.as_str().to_string());

        let updated = match active.update(&txn).await {
            Ok(m) => m,
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(Self::map_db_err(e));
            }
        };

        let inserted = match MedicalRecordActiveModel::from_new(record).insert(&txn).await {
            Ok(m) => m,
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(Self::map_db_err(e));
            }
        };

        txn.commit().await.map_err(Self::map_db_err)?;

        let appointment = Self::to_domain(updated)?;
        let record = inserted
            .to_domain()
            .map_err(AppointmentRepositoryError::DatabaseError)?;

        Ok((appointment, record))
    }
}

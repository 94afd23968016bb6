use super::sea_orm_entity::appointments::{
    Column as AppointmentColumn, Entity as AppointmentEntity, Model as AppointmentModel,
};
use crate::appointment::application::domain::entities::{Appointment, AppointmentStatus};
use crate::appointment::application::ports::outgoing::appointment_query::{
    AppointmentQuery, AppointmentQueryError,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone, Debug)]
pub struct AppointmentQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AppointmentQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_many(models: Vec<AppointmentModel>) -> Result<Vec<Appointment>, AppointmentQueryError> {
        models
            .into_iter()
            .map(|m| m.to_domain().map_err(AppointmentQueryError::CorruptedRow))
            .collect()
    }

    fn status_names(statuses: &[AppointmentStatus]) -> Vec<&'static str> {
        statuses.iter().map(|s| s.as_str()).collect()
    }
}

fn db_error(e: sea_orm::DbErr) -> AppointmentQueryError {
    AppointmentQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl AppointmentQuery for AppointmentQueryPostgres {
    async fn find_by_id(
        &self,
        appointment_id: Uuid,
    ) -> Result<Option<Appointment>, AppointmentQueryError> {
        AppointmentEntity::find_by_id(appointment_id)
            .one(&*self.db)
            .await
            .map_err(db_error)?
            .map(|m| m.to_domain().map_err(AppointmentQueryError::CorruptedRow))
            .transpose()
    }

    async fn list_for_patient(
        &self,
        patient_id: Uuid,
    ) -> Result<Vec<Appointment>, AppointmentQueryError> {
        let rows = AppointmentEntity::find()
            .filter(AppointmentColumn::PatientId.eq(patient_id))
            .order_by_desc(AppointmentColumn::Date)
            .all(&*self.db)
            .await
            .map_err(db_error)?;

        Self::map_many(rows)
    }

    async fn list_for_doctor(
        &self,
        doctor_id: Uuid,
    ) -> Result<Vec<Appointment>, AppointmentQueryError> {
        let rows = AppointmentEntity::find()
            .filter(AppointmentColumn::DoctorId.eq(doctor_id))
            .order_by_asc(AppointmentColumn::Date)
            .all(&*self.db)
            .await
            .map_err(db_error)?;

        Self::map_many(rows)
    }

    async fn list_for_doctor_between(
        &self,
        doctor_id: Uuid,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Appointment>, AppointmentQueryError> {
        let rows = AppointmentEntity::find()
            .filter(AppointmentColumn::DoctorId.eq(doctor_id))
            .filter(AppointmentColumn::Date.gte(from))
            .filter(AppointmentColumn::Date.lt(to))
            .filter(AppointmentColumn::Status.ne(AppointmentStatus::Cancelled.as_str()))
            .order_by_asc(AppointmentColumn::Date)
            .all(&*self.db)
            .await
            .map_err(db_error)?;

        Self::map_many(rows)
    }

    async fn list_all(&self) -> Result<Vec<Appointment>, AppointmentQueryError> {
        let rows = AppointmentEntity::find()
            .order_by_desc(AppointmentColumn::Date)
            .all(&*self.db)
            .await
            .map_err(db_error)?;

        Self::map_many(rows)
    }

    async fn list_with_status(
        &self,
        statuses: &[AppointmentStatus],
    ) -> Result<Vec<Appointment>, AppointmentQueryError> {
        let rows = AppointmentEntity::find()
            .filter(AppointmentColumn::Status.is_in(Self::status_names(statuses)))
            .order_by_desc(AppointmentColumn::Date)
            .all(&*self.db)
            .await
            .map_err(db_error)?;

        Self::map_many(rows)
    }

    async fn count_for_doctor(
        &self,
        doctor_id: Uuid,
        statuses: &[AppointmentStatus],
    ) -> Result<u64, AppointmentQueryError> {
        let mut query = AppointmentEntity::find().filter(AppointmentColumn::DoctorId.eq(doctor_id));
        if !statuses.is_empty() {
            query = query.filter(AppointmentColumn::Status.is_in(Self::status_names(statuses)));
        }

        query.count(&*self.db).await.map_err(db_error)
    }

    async fn count_for_patient(&self, patient_id: Uuid) -> Result<u64, AppointmentQueryError> {
        AppointmentEntity::find()
            .filter(AppointmentColumn::PatientId.eq(patient_id))
            .count(&*self.db)
            .await
            .map_err(db_error)
    }

    async fn count_all(&self) -> Result<u64, AppointmentQueryError> {
        AppointmentEntity::find()
            .count(&*self.db)
            .await
            .map_err(db_error)
    }
}

use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::NotSet;
use sea_orm::Set;
use serde_json::Value as JsonValue;

use crate::medical_record::application::domain::entities::{MedicalRecord, NewMedicalRecord};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "medical_records")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Uuid")]
    pub patient_id: Uuid,

    #[sea_orm(column_type = "Uuid")]
    pub doctor_id: Uuid,

    #[sea_orm(column_type = "Uuid", nullable)]
    pub appointment_id: Option<Uuid>,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub date: DateTimeWithTimeZone,

    #[sea_orm(column_type = "Text")]
    pub diagnosis: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub symptoms: Option<String>,

    // JSON array of strings
    #[sea_orm(column_type = "JsonBinary")]
    pub medications: JsonValue,

    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::auth::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::PatientId",
        to = "crate::auth::adapter::outgoing::sea_orm_entity::users::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Patient,

    #[sea_orm(
        belongs_to = "crate::appointment::adapter::outgoing::sea_orm_entity::appointments::Entity",
        from = "Column::AppointmentId",
        to = "crate::appointment::adapter::outgoing::sea_orm_entity::appointments::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Appointment,
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn to_domain(self) -> Result<MedicalRecord, String> {
        let medications = serde_json::from_value::<Vec<String>>(self.medications)
            .map_err(|e| format!("medical record {}: bad medications: {}", self.id, e))?;

        Ok(MedicalRecord {
            id: self.id,
            patient_id: self.patient_id,
            doctor_id: self.doctor_id,
            appointment_id: self.appointment_id,
            date: self.date.with_timezone(&chrono::Utc),
            diagnosis: self.diagnosis,
            symptoms: self.symptoms,
            medications,
            notes: self.notes,
            created_at: self.created_at.with_timezone(&chrono::Utc),
        })
    }
}

impl ActiveModel {
    /// Fresh row for `record`. `created_at` is left to the database default.
    pub fn from_new(record: NewMedicalRecord) -> Self {
        Self {
            id: Set(Uuid::new_v4()),
            patient_id: Set(record.patient_id),
            doctor_id: Set(record.doctor_id),
            appointment_id: Set(record.appointment_id),
            date: Set(record.date.into()),
            diagnosis: Set(record.diagnosis),
            symptoms: Set(record.symptoms),
            medications: Set(JsonValue::from(record.medications)),
            notes: Set(record.notes),
            created_at: NotSet,
        }
    }
}

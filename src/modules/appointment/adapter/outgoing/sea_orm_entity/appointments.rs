use sea_orm::entity::prelude::*;
#[cfg(feature = "no_db_triggers")]
use sea_orm::Set;
use serde_json::Value as JsonValue;

use crate::appointment::application::domain::entities::{
    Appointment, AppointmentStatus, Feedback,
};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "appointments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Uuid")]
    pub patient_id: Uuid,

    #[sea_orm(column_type = "Uuid")]
    pub doctor_id: Uuid,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub date: DateTimeWithTimeZone,

    // pending | booked | completed | cancelled
    pub status: String,

    // { "rating": 1..5, "comment": "..." }
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub feedback: Option<JsonValue>,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
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
        belongs_to = "crate::auth::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::DoctorId",
        to = "crate::auth::adapter::outgoing::sea_orm_entity::users::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Doctor,
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        #[cfg(feature = "no_db_triggers")]
        {
            if !_insert {
                let mut active = self;
                active.updated_at = Set(chrono::Utc::now().into());
                return Ok(active);
            }
        }

        Ok(self)
    }
}

impl Model {
    pub fn to_domain(self) -> Result<Appointment, String> {
        let status = self
            .status
            .parse::<AppointmentStatus>()
            .map_err(|e| format!("appointment {}: {}", self.id, e))?;

        let feedback = self
            .feedback
            .filter(|v| !v.is_null())
            .map(serde_json::from_value::<Feedback>)
            .transpose()
            .map_err(|e| format!("appointment {}: bad feedback: {}", self.id, e))?;

        Ok(Appointment {
            id: self.id,
            patient_id: self.patient_id,
            doctor_id: self.doctor_id,
            date: self.date.with_timezone(&chrono::Utc),
            status,
            feedback,
            created_at: self.created_at.with_timezone(&chrono::Utc),
            updated_at: self.updated_at.with_timezone(&chrono::Utc),
        })
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::Model;
    use chrono::{DateTime, Utc};
    use uuid::Uuid;

    pub fn appointment_model(
        patient_id: Uuid,
        doctor_id: Uuid,
        date: DateTime<Utc>,
        status: &str,
    ) -> Model {
        let now = Utc::now();
        Model {
            id: Uuid::new_v4(),
            patient_id,
            doctor_id,
            date: date.into(),
            status: status.to_string(),
            feedback: None,
            created_at: now.into(),
            updated_at: now.into(),
        }
    }
}

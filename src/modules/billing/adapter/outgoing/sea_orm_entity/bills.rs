use sea_orm::entity::prelude::*;
#[cfg(feature = "no_db_triggers")]
use sea_orm::Set;

use crate::billing::application::domain::entities::{Bill, BillStatus};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "bills")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Uuid")]
    pub patient_id: Uuid,

    #[sea_orm(column_type = "Uuid")]
    pub appointment_id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    pub amount_cents: i64,

    // pending | paid | overdue
    pub status: String,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub due_date: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone", nullable)]
    pub paid_at: Option<DateTimeWithTimeZone>,

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
        belongs_to = "crate::appointment::adapter::outgoing::sea_orm_entity::appointments::Entity",
        from = "Column::AppointmentId",
        to = "crate::appointment::adapter::outgoing::sea_orm_entity::appointments::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Appointment,
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
    pub fn to_domain(self) -> Result<Bill, String> {
        let status = self
            .status
            .parse::<BillStatus>()
            .map_err(|e| format!("bill {}: {}", self.id, e))?;

        Ok(Bill {
            id: self.id,
            patient_id: self.patient_id,
            appointment_id: self.appointment_id,
            description: self.description,
            amount_cents: self.amount_cents,
            status,
            due_date: self.due_date.with_timezone(&chrono::Utc),
            paid_at: self.paid_at.map(|t| t.with_timezone(&chrono::Utc)),
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

    pub fn bill_model(patient_id: Uuid, status: &str, due_date: DateTime<Utc>) -> Model {
        let now = Utc::now();
        Model {
            id: Uuid::new_v4(),
            patient_id,
            appointment_id: Uuid::new_v4(),
            description: "Consultation".to_string(),
            amount_cents: 15_000,
            status: status.to_string(),
            due_date: due_date.into(),
            paid_at: None,
            created_at: now.into(),
            updated_at: now.into(),
        }
    }
}

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelBehavior, ActiveValue, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(unique)]
    pub username: String,

    #[sea_orm(unique)]
    pub email: String,

    pub password_hash: String,

    // admin | doctor | patient
    pub role: String,

    pub name: String,

    #[sea_orm(nullable)]
    pub phone: Option<String>,

    #[sea_orm(nullable)]
    pub specialization: Option<String>,

    #[sea_orm(nullable)]
    pub experience_years: Option<i32>,

    #[sea_orm(nullable)]
    pub otp: Option<String>,

    #[sea_orm(column_type = "TimestampWithTimeZone", nullable)]
    pub otp_expires_at: Option<DateTimeWithTimeZone>,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(email) = &self.email {
            self.email = Set(email.trim().to_lowercase());
        }

        #[cfg(feature = "no_db_triggers")]
        {
            use chrono::Utc;

            let insert = _insert;
            if !insert {
                self.updated_at = Set(Utc::now().into());
            }
        }

        Ok(self)
    }
}

impl Model {
    pub fn to_query_result(
        self,
    ) -> Result<crate::auth::application::ports::outgoing::UserQueryResult, String> {
        use crate::auth::application::domain::entities::Role;
        use crate::auth::application::ports::outgoing::UserQueryResult;

        let role = self
            .role
            .parse::<Role>()
            .map_err(|e| format!("user {}: {}", self.id, e))?;

        Ok(UserQueryResult {
            id: self.id,
            username: self.username,
            email: self.email,
            password_hash: self.password_hash,
            role,
            name: self.name,
            phone: self.phone,
            specialization: self.specialization,
            experience_years: self.experience_years,
            otp: self.otp,
            otp_expires_at: self.otp_expires_at.map(|t| t.with_timezone(&chrono::Utc)),
            created_at: self.created_at.with_timezone(&chrono::Utc),
        })
    }

    pub fn to_summary(&self) -> crate::auth::application::domain::entities::UserSummary {
        crate::auth::application::domain::entities::UserSummary {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
        }
    }
}

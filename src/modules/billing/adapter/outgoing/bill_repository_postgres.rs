use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set, UpdateMany,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::billing::application::domain::entities::{Bill, BillStatus};
use crate::billing::application::ports::outgoing::bill_repository::{
    BillRepository, BillRepositoryError, NewBill,
};

use super::sea_orm_entity::bills::{
    ActiveModel as BillActiveModel, Column as BillColumn, Entity as BillEntity,
};

#[derive(Clone, Debug)]
pub struct BillRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl BillRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn db_error(e: impl ToString) -> BillRepositoryError {
    BillRepositoryError::DatabaseError(e.to_string())
}

/// Bulk updates skip `before_save`, so stamp `updated_at` here when no trigger
/// does it.
fn touch(update: UpdateMany<BillEntity>) -> UpdateMany<BillEntity> {
    #[cfg(feature = "no_db_triggers")]
    let update = update.col_expr(BillColumn::UpdatedAt, Expr::cust("CURRENT_TIMESTAMP"));

    update
}

#[async_trait]
impl BillRepository for BillRepositoryPostgres {
    async fn insert(&self, data: NewBill) -> Result<Bill, BillRepositoryError> {
        let active = BillActiveModel {
            id: Set(Uuid::new_v4()),
            patient_id: Set(data.patient_id),
            appointment_id: Set(data.appointment_id),
            description: Set(data.description),
            amount_cents: Set(data.amount_cents),
            status: Set(BillStatus::Pending.as_str().to_string()),
            due_date: Set(data.due_date.into()),
            paid_at: Set(None),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active.insert(&*self.db).await.map_err(db_error)?;
        inserted.to_domain().map_err(BillRepositoryError::DatabaseError)
    }

    async fn mark_overdue(&self, bill_ids: Vec<Uuid>) -> Result<u64, BillRepositoryError> {
        if bill_ids.is_empty() {
            return Ok(0);
        }

        // Only rows still pending, so a concurrent payment is never overwritten
        let update = BillEntity::update_many()
            .col_expr(BillColumn::Status, Expr::value(BillStatus::Overdue.as_str()))
            .filter(BillColumn::Id.is_in(bill_ids))
            .filter(BillColumn::Status.eq(BillStatus::Pending.as_str()));

        let result = touch(update)
            .exec(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(result.rows_affected)
    }

    async fn mark_paid(
        &self,
        bill_id: Uuid,
        paid_at: DateTime<Utc>,
    ) -> Result<Bill, BillRepositoryError> {
        let update = BillEntity::update_many()
            .col_expr(BillColumn::Status, Expr::value(BillStatus::Paid.as_str()))
            .col_expr(BillColumn::PaidAt, Expr::value(paid_at.fixed_offset()))
            .filter(BillColumn::Id.eq(bill_id))
            .filter(BillColumn::Status.ne(BillStatus::Paid.as_str()));

        let result = touch(update).exec(&*self.db).await.map_err(db_error)?;

        let bill = BillEntity::find_by_id(bill_id)
            .one(&*self.db)
            .await
            .map_err(db_error)?
            .ok_or(BillRepositoryError::NotFound)?
            .to_domain()
            .map_err(BillRepositoryError::DatabaseError)?;

        if result.rows_affected == 0 {
            return Err(BillRepositoryError::AlreadyPaid);
        }

        Ok(bill)
    }
}

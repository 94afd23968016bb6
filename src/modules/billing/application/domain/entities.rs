use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserSummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    Pending,
    Paid,
    Overdue,
}

impl BillStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BillStatus::Pending => "pending",
            BillStatus::Paid => "paid",
            BillStatus::Overdue => "overdue",
        }
    }

    /// Status as of `now`: a pending bill past its due date is overdue.
    pub fn resolve(self, due_date: DateTime<Utc>, now: DateTime<Utc>) -> BillStatus {
        match self {
            BillStatus::Pending if due_date < now => BillStatus::Overdue,
            other => other,
        }
    }
}

impl fmt::Display for BillStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown bill status: {0}")]
pub struct UnknownBillStatus(pub String);

impl FromStr for BillStatus {
    type Err = UnknownBillStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(BillStatus::Pending),
            "paid" => Ok(BillStatus::Paid),
            "overdue" => Ok(BillStatus::Overdue),
            other => Err(UnknownBillStatus(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Bill {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub appointment_id: Uuid,
    pub description: String,
    /// Minor currency units
    pub amount_cents: i64,
    pub status: BillStatus,
    pub due_date: DateTime<Utc>,
    pub paid_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Bill {
    pub fn is_overdue_at(&self, now: DateTime<Utc>) -> bool {
        self.status != BillStatus::Overdue
            && self.status.resolve(self.due_date, now) == BillStatus::Overdue
    }
}

/// Bill with the appointment it charges for.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct BillView {
    #[serde(flatten)]
    pub bill: Bill,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub appointment_date: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub doctor: Option<UserSummary>,
}

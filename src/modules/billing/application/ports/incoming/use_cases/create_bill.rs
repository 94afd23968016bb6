use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::billing::application::domain::entities::Bill;

#[derive(Debug, Clone)]
pub struct CreateBillCommand {
    appointment_id: Uuid,
    description: String,
    amount_cents: i64,
    due_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CreateBillCommandError {
    #[error("Description cannot be empty")]
    EmptyDescription,

    #[error("Amount cannot be negative")]
    NegativeAmount,
}

impl CreateBillCommand {
    pub fn new(
        appointment_id: Uuid,
        description: String,
        amount_cents: i64,
        due_date: DateTime<Utc>,
    ) -> Result<Self, CreateBillCommandError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(CreateBillCommandError::EmptyDescription);
        }
        if amount_cents < 0 {
            return Err(CreateBillCommandError::NegativeAmount);
        }

        Ok(Self {
            appointment_id,
            description: description.to_string(),
            amount_cents,
            due_date,
        })
    }

    pub fn appointment_id(&self) -> Uuid {
        self.appointment_id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount_cents(&self) -> i64 {
        self.amount_cents
    }

    pub fn due_date(&self) -> DateTime<Utc> {
        self.due_date
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateBillError {
    #[error("Appointment not found")]
    AppointmentNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Bills the patient of an existing appointment.
#[async_trait]
pub trait CreateBillUseCase: Send + Sync {
    async fn execute(&self, command: CreateBillCommand) -> Result<Bill, CreateBillError>;
}

use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::appointment::application::domain::entities::{Appointment, AppointmentStatus};
use crate::auth::application::domain::entities::UserId;
use crate::medical_record::application::domain::entities::MedicalRecord;

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CloseAppointmentCommand {
    appointment_id: Uuid,
    diagnosis: String,
    symptoms: Option<String>,
    medications: Vec<String>,
    notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CloseAppointmentCommandError {
    #[error("Appointment ID and diagnosis are required")]
    MissingDiagnosis,
}

impl CloseAppointmentCommand {
    pub fn new(
        appointment_id: Uuid,
        diagnosis: String,
        symptoms: Option<String>,
        medications: Vec<String>,
        notes: Option<String>,
    ) -> Result<Self, CloseAppointmentCommandError> {
        let diagnosis = diagnosis.trim();
        if diagnosis.is_empty() {
            return Err(CloseAppointmentCommandError::MissingDiagnosis);
        }

        Ok(Self {
            appointment_id,
            diagnosis: diagnosis.to_string(),
            symptoms: non_blank(symptoms),
            medications: medications
                .into_iter()
                .map(|m| m.trim().to_string())
                .filter(|m| !m.is_empty())
                .collect(),
            notes: non_blank(notes),
        })
    }

    pub fn appointment_id(&self) -> Uuid {
        self.appointment_id
    }

    pub fn diagnosis(&self) -> &str {
        &self.diagnosis
    }

    pub fn symptoms(&self) -> Option<&String> {
        self.symptoms.as_ref()
    }

    pub fn medications(&self) -> &[String] {
        &self.medications
    }

    pub fn notes(&self) -> Option<&String> {
        self.notes.as_ref()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

//
// ──────────────────────────────────────────────────────────
// Output / Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ClosedAppointment {
    pub appointment: Appointment,
    pub medical_record: MedicalRecord,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CloseAppointmentError {
    /// Unknown, or owned by another doctor.
    #[error("Appointment not found or access denied")]
    NotFound,

    #[error("Cannot close an appointment that is {0}")]
    InvalidStatus(AppointmentStatus),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CloseAppointmentUseCase: Send + Sync {
    async fn execute(
        &self,
        doctor_id: UserId,
        command: CloseAppointmentCommand,
    ) -> Result<ClosedAppointment, CloseAppointmentError>;
}

use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::medical_record::application::domain::entities::MedicalRecordView;

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct AddMedicalRecordCommand {
    diagnosis: String,
    symptoms: String,
    medications: Vec<String>,
    notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AddMedicalRecordCommandError {
    #[error("Diagnosis is required")]
    MissingDiagnosis,

    #[error("Symptoms are required")]
    MissingSymptoms,

    #[error("At least one medication is required")]
    MissingMedications,
}

impl AddMedicalRecordCommand {
    pub fn new(
        diagnosis: String,
        symptoms: String,
        medications: Vec<String>,
        notes: Option<String>,
    ) -> Result<Self, AddMedicalRecordCommandError> {
        let diagnosis = diagnosis.trim();
        if diagnosis.is_empty() {
            return Err(AddMedicalRecordCommandError::MissingDiagnosis);
        }

        let symptoms = symptoms.trim();
        if symptoms.is_empty() {
            return Err(AddMedicalRecordCommandError::MissingSymptoms);
        }

        let medications: Vec<String> = medications
            .into_iter()
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .collect();
        if medications.is_empty() {
            return Err(AddMedicalRecordCommandError::MissingMedications);
        }

        Ok(Self {
            diagnosis: diagnosis.to_string(),
            symptoms: symptoms.to_string(),
            medications,
            notes: notes.map(|n| n.trim().to_string()).filter(|n| !n.is_empty()),
        })
    }

    pub fn diagnosis(&self) -> &str {
        &self.diagnosis
    }

    pub fn symptoms(&self) -> &str {
        &self.symptoms
    }

    pub fn medications(&self) -> &[String] {
        &self.medications
    }

    pub fn notes(&self) -> Option<&String> {
        self.notes.as_ref()
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum AddMedicalRecordError {
    #[error("Patient not found")]
    PatientNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait AddMedicalRecordUseCase: Send + Sync {
    async fn execute(
        &self,
        doctor_id: UserId,
        patient_id: UserId,
        command: AddMedicalRecordCommand,
    ) -> Result<MedicalRecordView, AddMedicalRecordError>;
}

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

use crate::auth::application::domain::entities::{Role, UserId};
use crate::auth::application::ports::outgoing::UserQuery;
use crate::medical_record::application::domain::entities::{MedicalRecordView, NewMedicalRecord};
use crate::medical_record::application::ports::incoming::use_cases::{
    AddMedicalRecordCommand, AddMedicalRecordError, AddMedicalRecordUseCase,
};
use crate::medical_record::application::ports::outgoing::MedicalRecordRepository;

fn repo_error(e: impl ToString) -> AddMedicalRecordError {
    AddMedicalRecordError::RepositoryError(e.to_string())
}

pub struct AddMedicalRecordService<R>
where
    R: MedicalRecordRepository,
{
    record_repository: R,
    user_query: Arc<dyn UserQuery>,
}

impl<R> AddMedicalRecordService<R>
where
    R: MedicalRecordRepository,
{
    pub fn new(record_repository: R, user_query: Arc<dyn UserQuery>) -> Self {
        Self {
            record_repository,
            user_query,
        }
    }
}

#[async_trait]
impl<R> AddMedicalRecordUseCase for AddMedicalRecordService<R>
where
    R: MedicalRecordRepository + Send + Sync,
{
    async fn execute(
        &self,
        doctor_id: UserId,
        patient_id: UserId,
        command: AddMedicalRecordCommand,
    ) -> Result<MedicalRecordView, AddMedicalRecordError> {
        self.user_query
            .find_by_id(patient_id)
            .await
            .map_err(repo_error)?
            .filter(|u| u.role == Role::Patient)
            .ok_or(AddMedicalRecordError::PatientNotFound)?;

        let doctor = self
            .user_query
            .find_by_id(doctor_id)
            .await
            .map_err(repo_error)?;

        let record = self
            .record_repository
            .insert(NewMedicalRecord {
                patient_id: patient_id.value(),
                doctor_id: doctor_id.value(),
                appointment_id: None,
                date: Utc::now(),
                diagnosis: command.diagnosis().to_string(),
                symptoms: Some(command.symptoms().to_string()),
                medications: command.medications().to_vec(),
                notes: command.notes().cloned(),
            })
            .await
            .map_err(repo_error)?;

        tracing::info!(
            record_id = %record.id,
            %patient_id,
            %doctor_id,
            "Medical record added"
        );

        Ok(MedicalRecordView {
            record,
            doctor: doctor.map(|d| d.to_summary()),
        })
    }
}

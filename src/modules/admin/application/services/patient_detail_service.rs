use async_trait::async_trait;
use std::sync::Arc;

use crate::admin::application::domain::entities::PatientDetail;
use crate::admin::application::ports::incoming::use_cases::{
    PatientDetailError, PatientDetailUseCase,
};
use crate::appointment::application::ports::outgoing::AppointmentQuery;
use crate::auth::application::domain::entities::{Role, UserId};
use crate::auth::application::ports::outgoing::UserQuery;
use crate::medical_record::application::ports::outgoing::MedicalRecordQuery;

fn repo_error(e: impl ToString) -> PatientDetailError {
    PatientDetailError::RepositoryError(e.to_string())
}

pub struct PatientDetailService {
    user_query: Arc<dyn UserQuery>,
    appointment_query: Arc<dyn AppointmentQuery>,
    record_query: Arc<dyn MedicalRecordQuery>,
}

impl PatientDetailService {
    pub fn new(
        user_query: Arc<dyn UserQuery>,
        appointment_query: Arc<dyn AppointmentQuery>,
        record_query: Arc<dyn MedicalRecordQuery>,
    ) -> Self {
        Self {
            user_query,
            appointment_query,
            record_query,
        }
    }
}

#[async_trait]
impl PatientDetailUseCase for PatientDetailService {
    async fn execute(&self, patient_id: UserId) -> Result<PatientDetail, PatientDetailError> {
        let patient = self
            .user_query
            .find_by_id(patient_id)
            .await
            .map_err(repo_error)?
            .filter(|u| u.role == Role::Patient)
            .ok_or(PatientDetailError::NotFound)?;

        let (appointment_count, medical_record_count) = tokio::try_join!(
            async {
                self.appointment_query
                    .count_for_patient(patient.id)
                    .await
                    .map_err(repo_error)
            },
            async {
                self.record_query
                    .count_for_patient(patient.id)
                    .await
                    .map_err(repo_error)
            },
        )?;

        Ok(PatientDetail {
            profile: patient.to_profile(),
            appointment_count,
            medical_record_count,
        })
    }
}

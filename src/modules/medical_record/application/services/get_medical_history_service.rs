use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::domain::entities::{Actor, UserId};
use crate::auth::application::ports::outgoing::UserQuery;
use crate::auth::application::services::user_summaries::UserSummaries;
use crate::medical_record::application::domain::entities::MedicalRecordView;
use crate::medical_record::application::ports::incoming::use_cases::{
    GetMedicalHistoryError, GetMedicalHistoryUseCase,
};
use crate::medical_record::application::ports::outgoing::MedicalRecordQuery;

pub struct GetMedicalHistoryService<Q>
where
    Q: MedicalRecordQuery,
{
    record_query: Q,
    user_query: Arc<dyn UserQuery>,
}

impl<Q> GetMedicalHistoryService<Q>
where
    Q: MedicalRecordQuery,
{
    pub fn new(record_query: Q, user_query: Arc<dyn UserQuery>) -> Self {
        Self {
            record_query,
            user_query,
        }
    }
}

#[async_trait]
impl<Q> GetMedicalHistoryUseCase for GetMedicalHistoryService<Q>
where
    Q: MedicalRecordQuery + Send + Sync,
{
    async fn execute(
        &self,
        actor: Actor,
        patient_id: UserId,
    ) -> Result<Vec<MedicalRecordView>, GetMedicalHistoryError> {
        if !actor.is_self(patient_id) && !actor.is_doctor() && !actor.is_admin() {
            return Err(GetMedicalHistoryError::Forbidden);
        }

        let records = self
            .record_query
            .list_for_patient(patient_id.value())
            .await
            .map_err(|e| GetMedicalHistoryError::RepositoryError(e.to_string()))?;

        let doctors = UserSummaries::load(
            self.user_query.as_ref(),
            records.iter().map(|r| r.doctor_id),
        )
        .await
        .map_err(|e| GetMedicalHistoryError::RepositoryError(e.to_string()))?;

        Ok(records
            .into_iter()
            .map(|record| MedicalRecordView {
                doctor: doctors.get(record.doctor_id),
                record,
            })
            .collect())
    }
}

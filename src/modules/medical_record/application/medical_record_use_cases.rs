use std::sync::Arc;

use crate::medical_record::application::ports::incoming::use_cases::{
    AddMedicalRecordUseCase, GetMedicalHistoryUseCase,
};

#[derive(Clone)]
pub struct MedicalRecordUseCases {
    pub history: Arc<dyn GetMedicalHistoryUseCase + Send + Sync>,
    pub add: Arc<dyn AddMedicalRecordUseCase + Send + Sync>,
}

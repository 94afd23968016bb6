mod add_medical_record_service;
mod get_medical_history_service;

pub use add_medical_record_service::AddMedicalRecordService;
pub use get_medical_history_service::GetMedicalHistoryService;

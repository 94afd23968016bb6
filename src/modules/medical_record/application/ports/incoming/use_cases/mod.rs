mod add_medical_record;
mod get_medical_history;

pub use add_medical_record::{
    AddMedicalRecordCommand, AddMedicalRecordCommandError, AddMedicalRecordError,
    AddMedicalRecordUseCase,
};
pub use get_medical_history::{GetMedicalHistoryError, GetMedicalHistoryUseCase};

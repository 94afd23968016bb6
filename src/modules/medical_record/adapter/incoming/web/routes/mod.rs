pub mod add_medical_record;
pub mod medical_history;

pub use add_medical_record::{add_medical_record_handler, AddMedicalRecordRequest};
pub use medical_history::{medical_history_handler, my_medical_records_handler};

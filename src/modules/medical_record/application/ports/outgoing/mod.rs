pub mod medical_record_query;
pub mod medical_record_repository;

pub use medical_record_query::{MedicalRecordQuery, MedicalRecordQueryError};
pub use medical_record_repository::{MedicalRecordRepository, MedicalRecordRepositoryError};

pub mod medical_record_query_postgres;
pub mod medical_record_repository_postgres;
pub mod sea_orm_entity;

pub use medical_record_query_postgres::MedicalRecordQueryPostgres;
pub use medical_record_repository_postgres::MedicalRecordRepositoryPostgres;

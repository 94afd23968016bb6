pub mod medical_records;

pub mod domain;
pub mod medical_record_use_cases;
pub mod ports;
pub mod services;

mod hospital_email_service;

pub use hospital_email_service::HospitalEmailService;

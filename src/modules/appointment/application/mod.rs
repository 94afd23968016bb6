pub mod appointment_use_cases;
pub mod domain;
pub mod orchestrator;
pub mod ports;
pub mod services;

pub mod admin;
pub mod appointment;
pub mod auth;
pub mod billing;
pub mod directory;
pub mod email;
pub mod medical_record;

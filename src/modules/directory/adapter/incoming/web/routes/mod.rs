pub mod doctors;

pub use doctors::{doctor_contacts_handler, public_doctors_handler};

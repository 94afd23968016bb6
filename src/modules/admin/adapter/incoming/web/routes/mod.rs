pub mod all_appointments;
pub mod doctors;
pub mod patients;
pub mod stats;
pub mod users;

pub use all_appointments::all_appointments_handler;
pub use doctors::{
    create_doctor_handler, delete_doctor_handler, list_doctors_handler, CreateDoctorRequest,
};
pub use patients::{delete_patient_handler, list_patients_handler, patient_detail_handler};
pub use stats::stats_handler;
pub use users::{create_user_handler, delete_user_handler, list_users_handler, CreateUserRequest};

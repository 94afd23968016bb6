mod all_appointments_service;
mod doctor_stats_service;
mod hospital_stats_service;
mod manage_users_service;
mod patient_detail_service;

pub use all_appointments_service::AllAppointmentsService;
pub use doctor_stats_service::DoctorStatsService;
pub use hospital_stats_service::HospitalStatsService;
pub use manage_users_service::{DeleteUserService, ListUsersService};
pub use patient_detail_service::PatientDetailService;

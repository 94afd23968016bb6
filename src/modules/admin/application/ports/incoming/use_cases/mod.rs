mod all_appointments;
mod doctor_stats;
mod hospital_stats;
mod manage_users;
mod patient_detail;

pub use all_appointments::{AllAppointmentsError, AllAppointmentsUseCase};
pub use doctor_stats::{DoctorStatsError, ListDoctorsWithStatsUseCase};
pub use hospital_stats::{HospitalStatsError, HospitalStatsUseCase};
pub use manage_users::{DeleteUserError, DeleteUserUseCase, ListUsersError, ListUsersUseCase};
pub use patient_detail::{PatientDetailError, PatientDetailUseCase};

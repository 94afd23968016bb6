use std::sync::Arc;

use crate::admin::application::ports::incoming::use_cases::{
    AllAppointmentsUseCase, DeleteUserUseCase, HospitalStatsUseCase, ListDoctorsWithStatsUseCase,
    ListUsersUseCase, PatientDetailUseCase,
};

/// Account creation goes through `AuthUseCases::create_user`.
#[derive(Clone)]
pub struct AdminUseCases {
    pub stats: Arc<dyn HospitalStatsUseCase + Send + Sync>,
    pub list_users: Arc<dyn ListUsersUseCase + Send + Sync>,
    pub delete_user: Arc<dyn DeleteUserUseCase + Send + Sync>,
    pub doctors: Arc<dyn ListDoctorsWithStatsUseCase + Send + Sync>,
    pub patient_detail: Arc<dyn PatientDetailUseCase + Send + Sync>,
    pub all_appointments: Arc<dyn AllAppointmentsUseCase + Send + Sync>,
}

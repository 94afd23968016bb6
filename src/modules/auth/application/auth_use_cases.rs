use std::sync::Arc;

use crate::auth::application::orchestrator::patient_signup::PatientSignupOrchestrator;
use crate::auth::application::ports::incoming::use_cases::{
    CreateUserUseCase, FetchProfileUseCase, LoginUserUseCase, LogoutUseCase, RefreshTokenUseCase,
    ResetPasswordUseCase, SendOtpUseCase, VerifyOtpUseCase,
};

#[derive(Clone)]
pub struct AuthUseCases {
    pub login: Arc<dyn LoginUserUseCase + Send + Sync>,
    pub signup: Arc<PatientSignupOrchestrator>,
    pub send_otp: Arc<dyn SendOtpUseCase + Send + Sync>,
    pub verify_otp: Arc<dyn VerifyOtpUseCase + Send + Sync>,
    pub reset_password: Arc<dyn ResetPasswordUseCase + Send + Sync>,
    pub refresh_token: Arc<dyn RefreshTokenUseCase + Send + Sync>,
    pub logout: Arc<dyn LogoutUseCase + Send + Sync>,
    pub fetch_profile: Arc<dyn FetchProfileUseCase + Send + Sync>,
    pub create_user: Arc<dyn CreateUserUseCase + Send + Sync>,
}

mod create_user_service;
mod fetch_profile_service;
mod login_user_service;
mod logout_service;
mod refresh_token_service;
mod reset_password_service;
mod send_otp_service;
pub mod token_hasher;
pub mod user_summaries;
mod verify_otp_service;

pub use create_user_service::CreateUserService;
pub use fetch_profile_service::FetchProfileService;
pub use login_user_service::LoginUserService;
pub use logout_service::LogoutService;
pub use refresh_token_service::RefreshTokenService;
pub use reset_password_service::ResetPasswordService;
pub use send_otp_service::SendOtpService;
pub use verify_otp_service::VerifyOtpService;

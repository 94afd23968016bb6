pub mod account_errors;
pub mod login;
pub mod logout;
pub mod me;
pub mod password_reset;
pub mod refresh_token;
pub mod signup;

pub use login::{admin_login_handler, login_handler, AdminLoginRequestDto, LoginRequestDto};
pub use logout::{logout_handler, LogoutRequestDto};
pub use me::me_handler;
pub use password_reset::{
    reset_password_handler, send_otp_handler, verify_otp_handler, ResetPasswordRequest,
    SendOtpRequest, VerifyOtpRequest,
};
pub use refresh_token::{refresh_token_handler, RefreshTokenRequestDto};
pub use signup::{signup_handler, SignupRequest};

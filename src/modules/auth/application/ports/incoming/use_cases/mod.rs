mod create_user;
mod fetch_profile;
mod login_user;
mod logout_user;
mod refresh_token;
mod reset_password;
mod send_otp;
mod verify_otp;

pub use create_user::{
    CreateUserCommand, CreateUserCommandError, CreateUserError, CreateUserInput,
    CreateUserUseCase,
};
pub use fetch_profile::{FetchProfileError, FetchProfileUseCase};
pub use login_user::{AuthSession, LoginCommand, LoginCommandError, LoginError, LoginUserUseCase};
pub use logout_user::{LogoutCommand, LogoutError, LogoutUseCase};
pub use refresh_token::{RefreshTokenCommand, RefreshTokenError, RefreshTokenUseCase, RefreshedToken};
pub use reset_password::{
    ResetPasswordCommand, ResetPasswordCommandError, ResetPasswordError, ResetPasswordUseCase,
};
pub use send_otp::{SendOtpError, SendOtpUseCase};
pub use verify_otp::{VerifyOtpError, VerifyOtpUseCase};

use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum VerifyOtpError {
    #[error("User not found")]
    UserNotFound,

    #[error("Invalid OTP")]
    InvalidOtp,

    #[error("OTP has expired")]
    OtpExpired,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait VerifyOtpUseCase: Send + Sync {
    async fn execute(&self, username: &str, otp: &str) -> Result<(), VerifyOtpError>;
}

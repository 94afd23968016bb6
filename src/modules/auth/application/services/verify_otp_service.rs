use async_trait::async_trait;
use chrono::Utc;

use crate::auth::application::domain::otp::{check_otp, OtpCheckError};
use crate::auth::application::ports::incoming::use_cases::{VerifyOtpError, VerifyOtpUseCase};
use crate::auth::application::ports::outgoing::UserQuery;

impl From<OtpCheckError> for VerifyOtpError {
    fn from(error: OtpCheckError) -> Self {
        match error {
            OtpCheckError::Invalid => VerifyOtpError::InvalidOtp,
            OtpCheckError::Expired => VerifyOtpError::OtpExpired,
        }
    }
}

/// Checks a code without consuming it; the reset step clears it.
pub struct VerifyOtpService<Q>
where
    Q: UserQuery,
{
    user_query: Q,
}

impl<Q> VerifyOtpService<Q>
where
    Q: UserQuery,
{
    pub fn new(user_query: Q) -> Self {
        Self { user_query }
    }
}

#[async_trait]
impl<Q> VerifyOtpUseCase for VerifyOtpService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, username: &str, otp: &str) -> Result<(), VerifyOtpError> {
        let user = self
            .user_query
            .find_by_username(username.trim())
            .await
            .map_err(|e| VerifyOtpError::RepositoryError(e.to_string()))?
            .ok_or(VerifyOtpError::UserNotFound)?;

        check_otp(user.otp.as_deref(), user.otp_expires_at, otp, Utc::now())?;

        Ok(())
    }
}

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::domain::otp::{check_otp, OtpCheckError};
use crate::auth::application::ports::incoming::use_cases::{
    ResetPasswordCommand, ResetPasswordError, ResetPasswordUseCase,
};
use crate::auth::application::ports::outgoing::{
    PasswordHasher, UserQuery, UserRepository, UserRepositoryError,
};

pub struct ResetPasswordService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    user_query: Q,
    user_repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl<Q, R> ResetPasswordService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(user_query: Q, user_repository: R, password_hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            user_query,
            user_repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<Q, R> ResetPasswordUseCase for ResetPasswordService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, command: ResetPasswordCommand) -> Result<(), ResetPasswordError> {
        let user = self
            .user_query
            .find_by_username(command.username())
            .await
            .map_err(|e| ResetPasswordError::RepositoryError(e.to_string()))?
            .ok_or(ResetPasswordError::UserNotFound)?;

        check_otp(
            user.otp.as_deref(),
            user.otp_expires_at,
            command.otp(),
            Utc::now(),
        )
        .map_err(|e| match e {
            OtpCheckError::Invalid => ResetPasswordError::InvalidOtp,
            OtpCheckError::Expired => ResetPasswordError::OtpExpired,
        })?;

        let password_hash = self
            .password_hasher
            .hash_password(command.new_password())
            .await
            .map_err(|e| ResetPasswordError::HashingFailed(e.to_string()))?;

        self.user_repository
            .update_password(UserId::from(user.id), password_hash)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => ResetPasswordError::UserNotFound,
                other => ResetPasswordError::RepositoryError(other.to_string()),
            })?;

        tracing::info!(user_id = %user.id, "Password reset");
        Ok(())
    }
}

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::domain::otp::OtpPolicy;
use crate::auth::application::ports::incoming::use_cases::{SendOtpError, SendOtpUseCase};
use crate::auth::application::ports::outgoing::{UserQuery, UserRepository};
use crate::email::application::ports::outgoing::HospitalNotifier;

/// Issues a password-reset code, stores it on the account and mails it.
pub struct SendOtpService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    user_query: Q,
    user_repository: R,
    notifier: Arc<dyn HospitalNotifier>,
    policy: OtpPolicy,
}

impl<Q, R> SendOtpService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(
        user_query: Q,
        user_repository: R,
        notifier: Arc<dyn HospitalNotifier>,
        policy: OtpPolicy,
    ) -> Self {
        Self {
            user_query,
            user_repository,
            notifier,
            policy,
        }
    }
}

#[async_trait]
impl<Q, R> SendOtpUseCase for SendOtpService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, username: &str) -> Result<(), SendOtpError> {
        let user = self
            .user_query
            .find_by_username(username.trim())
            .await
            .map_err(|e| SendOtpError::RepositoryError(e.to_string()))?
            .ok_or(SendOtpError::UserNotFound)?;

        let code = self.policy.generate_code();
        let expires_at = self.policy.expires_at(Utc::now());

        self.user_repository
            .set_otp(UserId::from(user.id), code.clone(), expires_at)
            .await
            .map_err(|e| SendOtpError::RepositoryError(e.to_string()))?;

        self.notifier
            .send_password_reset_otp(&user.email, &user.name, &code, self.policy.ttl_minutes())
            .await
            .map_err(|e| {
                tracing::error!(user_id = %user.id, "Password reset mail failed: {}", e);
                SendOtpError::EmailDeliveryFailed(e.to_string())
            })?;

        tracing::info!(user_id = %user.id, "Password reset code issued");
        Ok(())
    }
}

use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SendOtpError {
    #[error("User not found")]
    UserNotFound,

    #[error("Email delivery failed: {0}")]
    EmailDeliveryFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Issues a password-reset code and mails it to the account's address.
#[async_trait]
pub trait SendOtpUseCase: Send + Sync {
    async fn execute(&self, username: &str) -> Result<(), SendOtpError>;
}

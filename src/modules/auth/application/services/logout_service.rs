use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;

use crate::auth::application::ports::incoming::use_cases::{
    LogoutCommand, LogoutError, LogoutUseCase,
};
use crate::auth::application::ports::outgoing::{
    TokenProvider, TokenRepository, TokenRepositoryError,
};
use crate::auth::application::services::token_hasher::hash_token;

impl From<TokenRepositoryError> for LogoutError {
    fn from(error: TokenRepositoryError) -> Self {
        match error {
            TokenRepositoryError::DatabaseError(msg) => LogoutError::DatabaseError(msg),
            TokenRepositoryError::InvalidToken => {
                LogoutError::TokenRevocationFailed(error.to_string())
            }
        }
    }
}

pub struct LogoutService<R>
where
    R: TokenRepository,
{
    token_repository: R,
    token_provider: Arc<dyn TokenProvider>,
}

impl<R> LogoutService<R>
where
    R: TokenRepository,
{
    pub fn new(token_repository: R, token_provider: Arc<dyn TokenProvider>) -> Self {
        Self {
            token_repository,
            token_provider,
        }
    }
}

#[async_trait]
impl<R> LogoutUseCase for LogoutService<R>
where
    R: TokenRepository + Send + Sync,
{
    async fn execute(&self, command: LogoutCommand) -> Result<(), LogoutError> {
        let Some(refresh_token) = command.refresh_token() else {
            return Ok(());
        };

        // An unverifiable token cannot be used again anyway
        let claims = match self.token_provider.verify_token(refresh_token) {
            Ok(claims) => claims,
            Err(e) => {
                tracing::debug!("Logout with unusable refresh token: {}", e);
                return Ok(());
            }
        };

        let expires_at = DateTime::<Utc>::from_timestamp(claims.exp, 0)
            .unwrap_or_else(|| Utc::now() + Duration::days(7));

        self.token_repository
            .blacklist_token(hash_token(refresh_token), claims.sub, expires_at)
            .await?;

        tracing::info!(user_id = %claims.sub, "Refresh token revoked");
        Ok(())
    }
}

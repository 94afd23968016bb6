use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::ports::incoming::use_cases::{
    RefreshTokenCommand, RefreshTokenError, RefreshTokenUseCase, RefreshedToken,
};
use crate::auth::application::ports::outgoing::{TokenError, TokenProvider, TokenRepository};
use crate::auth::application::services::token_hasher::hash_token;

impl From<TokenError> for RefreshTokenError {
    fn from(error: TokenError) -> Self {
        match error {
            TokenError::TokenExpired => RefreshTokenError::TokenExpired,
            TokenError::EncodingError(msg) => RefreshTokenError::TokenGenerationFailed(msg),
            TokenError::TokenNotYetValid
            | TokenError::InvalidTokenType(_)
            | TokenError::InvalidSignature
            | TokenError::MalformedToken => RefreshTokenError::InvalidToken,
        }
    }
}

pub struct RefreshTokenService<R>
where
    R: TokenRepository,
{
    token_repository: R,
    token_provider: Arc<dyn TokenProvider>,
}

impl<R> RefreshTokenService<R>
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
impl<R> RefreshTokenUseCase for RefreshTokenService<R>
where
    R: TokenRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: RefreshTokenCommand,
    ) -> Result<RefreshedToken, RefreshTokenError> {
        let token = command.refresh_token();

        let revoked = self
            .token_repository
            .is_token_blacklisted(&hash_token(token))
            .await
            .map_err(|e| RefreshTokenError::BlacklistCheckFailed(e.to_string()))?;

        if revoked {
            tracing::warn!("Revoked refresh token presented");
            return Err(RefreshTokenError::TokenRevoked);
        }

        let access_token = self.token_provider.refresh_access_token(token)?;

        Ok(RefreshedToken { access_token })
    }
}

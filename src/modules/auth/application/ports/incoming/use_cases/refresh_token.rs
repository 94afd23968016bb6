use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

// ========================= Refresh Token Command =========================
#[derive(Debug, Clone)]
pub struct RefreshTokenCommand {
    refresh_token: String,
}

impl RefreshTokenCommand {
    /// Returns `None` for a blank token.
    pub fn new(refresh_token: String) -> Option<Self> {
        let refresh_token = refresh_token.trim();
        if refresh_token.is_empty() {
            return None;
        }

        Some(Self {
            refresh_token: refresh_token.to_string(),
        })
    }

    pub fn refresh_token(&self) -> &str {
        &self.refresh_token
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RefreshedToken {
    pub access_token: String,
}

// ========================= Refresh Token Error =========================
#[derive(Debug, Clone, thiserror::Error)]
pub enum RefreshTokenError {
    #[error("Invalid refresh token")]
    InvalidToken,

    #[error("Refresh token has expired")]
    TokenExpired,

    #[error("Refresh token has been revoked")]
    TokenRevoked,

    #[error("Blacklist lookup failed: {0}")]
    BlacklistCheckFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),
}

#[async_trait]
pub trait RefreshTokenUseCase: Send + Sync {
    async fn execute(&self, command: RefreshTokenCommand)
        -> Result<RefreshedToken, RefreshTokenError>;
}

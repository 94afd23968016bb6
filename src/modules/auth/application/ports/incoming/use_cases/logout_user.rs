use async_trait::async_trait;

// ========================= Logout Command =========================
#[derive(Debug, Clone)]
pub struct LogoutCommand {
    refresh_token: Option<String>,
}

impl LogoutCommand {
    pub fn new(refresh_token: Option<String>) -> Self {
        Self {
            refresh_token: refresh_token
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty()),
        }
    }

    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }
}

// ====================== Logout Error =============================
#[derive(Debug, Clone, thiserror::Error)]
pub enum LogoutError {
    #[error("Token revocation failed: {0}")]
    TokenRevocationFailed(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

// ============================ Logout Use Case =============================
#[async_trait]
pub trait LogoutUseCase: Send + Sync {
    async fn execute(&self, command: LogoutCommand) -> Result<(), LogoutError>;
}

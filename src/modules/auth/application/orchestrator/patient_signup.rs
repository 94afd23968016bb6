use std::sync::Arc;

use crate::auth::application::domain::entities::Role;
use crate::auth::application::ports::incoming::use_cases::{
    AuthSession, CreateUserCommand, CreateUserError, CreateUserUseCase,
};
use crate::auth::application::ports::outgoing::TokenProvider;

// ============================================================================
// Signup Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum PatientSignupError {
    #[error("User creation failed: {0}")]
    CreateUserFailed(#[from] CreateUserError),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),
}

// ============================================================================
// Patient Signup (Orchestration Layer)
// ============================================================================

/// Self-service registration: creates a patient account and logs it in.
#[derive(Clone)]
pub struct PatientSignupOrchestrator {
    create_user_use_case: Arc<dyn CreateUserUseCase + Send + Sync>,
    token_provider: Arc<dyn TokenProvider>,
}

impl PatientSignupOrchestrator {
    pub fn new(
        create_user_use_case: Arc<dyn CreateUserUseCase + Send + Sync>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            create_user_use_case,
            token_provider,
        }
    }

    pub async fn signup(
        &self,
        command: CreateUserCommand,
    ) -> Result<AuthSession, PatientSignupError> {
        debug_assert_eq!(command.role(), Role::Patient);

        let user = self.create_user_use_case.execute(command).await?;

        let access_token = self
            .token_provider
            .generate_access_token(user.id, user.role)
            .map_err(|e| PatientSignupError::TokenGenerationFailed(e.to_string()))?;

        let refresh_token = self
            .token_provider
            .generate_refresh_token(user.id, user.role)
            .map_err(|e| PatientSignupError::TokenGenerationFailed(e.to_string()))?;

        Ok(AuthSession {
            access_token,
            refresh_token,
            role: user.role,
            user,
        })
    }
}

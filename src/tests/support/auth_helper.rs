use actix_web::web;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::Role;
use crate::auth::application::ports::outgoing::{TokenClaims, TokenError, TokenProvider};

/// Token provider for handler and service tests.
///
/// Issued tokens look like `access.<uuid>.<role>` / `refresh.<uuid>.<role>`
/// and verify back to the same claims. Any other token (such as
/// `test-token`) verifies as an access token for the configured user, except
/// `expired-token` and `invalid-token`.
#[derive(Debug, Clone)]
pub struct StubTokenProvider {
    pub user_id: Uuid,
    pub role: Role,
}

impl StubTokenProvider {
    pub fn new(user_id: Uuid, role: Role) -> Self {
        Self { user_id, role }
    }

    pub fn patient(user_id: Uuid) -> Self {
        Self::new(user_id, Role::Patient)
    }

    pub fn doctor(user_id: Uuid) -> Self {
        Self::new(user_id, Role::Doctor)
    }

    pub fn admin(user_id: Uuid) -> Self {
        Self::new(user_id, Role::Admin)
    }

    fn claims(sub: Uuid, role: Role, token_type: &str) -> TokenClaims {
        let now = Utc::now().timestamp();
        TokenClaims {
            sub,
            role,
            iss: "test".to_string(),
            exp: now + 3600,
            iat: now,
            nbf: now,
            token_type: token_type.to_string(),
        }
    }

    fn parse_issued(token: &str) -> Option<TokenClaims> {
        let mut parts = token.splitn(3, '.');
        let token_type = parts.next()?;
        if token_type != "access" && token_type != "refresh" {
            return None;
        }
        let sub = parts.next()?.parse::<Uuid>().ok()?;
        let role = parts.next()?.parse::<Role>().ok()?;
        Some(Self::claims(sub, role, token_type))
    }
}

impl TokenProvider for StubTokenProvider {
    fn generate_access_token(&self, user_id: Uuid, role: Role) -> Result<String, TokenError> {
        Ok(format!("access.{}.{}", user_id, role))
    }

    fn generate_refresh_token(&self, user_id: Uuid, role: Role) -> Result<String, TokenError> {
        Ok(format!("refresh.{}.{}", user_id, role))
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        match token {
            "expired-token" => Err(TokenError::TokenExpired),
            "invalid-token" => Err(TokenError::InvalidSignature),
            _ => Ok(Self::parse_issued(token)
                .unwrap_or_else(|| Self::claims(self.user_id, self.role, "access"))),
        }
    }

    fn refresh_access_token(&self, refresh_token: &str) -> Result<String, TokenError> {
        let claims = self.verify_token(refresh_token)?;
        if claims.token_type != "refresh" {
            return Err(TokenError::InvalidTokenType("refresh".to_string()));
        }
        self.generate_access_token(claims.sub, claims.role)
    }
}

/// App data the auth extractors look up.
pub fn token_data(provider: StubTokenProvider) -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(provider);
    web::Data::new(provider)
}

pub fn bearer() -> (&'static str, &'static str) {
    ("Authorization", "Bearer test-token")
}

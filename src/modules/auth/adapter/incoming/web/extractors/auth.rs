use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};

use crate::auth::application::domain::entities::{Actor, Role, UserId};
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::shared::api::ApiResponse;

/// Any caller holding a valid access token.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub role: Role,
}

impl AuthenticatedUser {
    pub fn actor(&self) -> Actor {
        Actor::new(self.user_id, self.role)
    }
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

fn authenticate(req: &HttpRequest) -> Result<AuthenticatedUser, ActixError> {
    let Some(jwt_service) = req.app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>()
    else {
        tracing::error!("Token provider is not registered as app data");
        return Err(create_api_error(ApiResponse::internal_error()));
    };

    let Some(token) = extract_token_from_header(req) else {
        return Err(create_api_error(ApiResponse::unauthorized(
            "MISSING_AUTH_HEADER",
            "Missing or invalid authorization header",
        )));
    };

    match jwt_service.verify_token(&token) {
        Ok(claims) => {
            if claims.token_type != "access" {
                return Err(create_api_error(ApiResponse::unauthorized(
                    "INVALID_TOKEN_TYPE",
                    "Invalid token type",
                )));
            }

            Ok(AuthenticatedUser {
                user_id: UserId::from(claims.sub),
                role: claims.role,
            })
        }
        Err(e) => {
            tracing::debug!(error = %e, "Rejected bearer token");
            Err(create_api_error(ApiResponse::unauthorized(
                "INVALID_TOKEN",
                "Invalid or expired token",
            )))
        }
    }
}

fn require_role(req: &HttpRequest, role: Role) -> Result<AuthenticatedUser, ActixError> {
    let user = authenticate(req)?;

    if user.role != role {
        tracing::warn!(
            user_id = %user.user_id,
            role = %user.role,
            required = %role,
            "Access denied"
        );
        return Err(create_api_error(ApiResponse::forbidden(
            "ACCESS_DENIED",
            "You do not have permission to access this resource",
        )));
    }

    Ok(user)
}

//
// ──────────────────────────────────────────────────────────
// Role-gated principals
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy)]
pub struct AdminUser {
    pub user_id: UserId,
}

impl AdminUser {
    pub fn actor(&self) -> Actor {
        Actor::new(self.user_id, Role::Admin)
    }
}

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(require_role(req, Role::Admin).map(|u| AdminUser { user_id: u.user_id }))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DoctorUser {
    pub user_id: UserId,
}

impl DoctorUser {
    pub fn actor(&self) -> Actor {
        Actor::new(self.user_id, Role::Doctor)
    }
}

impl FromRequest for DoctorUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(require_role(req, Role::Doctor).map(|u| DoctorUser { user_id: u.user_id }))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PatientUser {
    pub user_id: UserId,
}

impl PatientUser {
    pub fn actor(&self) -> Actor {
        Actor::new(self.user_id, Role::Patient)
    }
}

impl FromRequest for PatientUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(require_role(req, Role::Patient).map(|u| PatientUser { user_id: u.user_id }))
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

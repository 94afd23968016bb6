use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::Role;
use crate::auth::application::ports::incoming::use_cases::{AuthSession, LoginCommand, LoginError};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

/// Login request from client
#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "jdoe")]
    pub username: String,

    #[schema(example = "secret1")]
    pub password: String,

    /// One of `admin`, `doctor`, `patient`
    #[schema(example = "patient")]
    pub role: String,
}

/// Admin console login: the role is implied
#[derive(Deserialize, ToSchema)]
pub struct AdminLoginRequestDto {
    #[schema(example = "admin")]
    pub username: String,

    #[schema(example = "secret1")]
    pub password: String,
}

/// User login
///
/// Authenticates a user holding the requested role and returns JWT access and refresh tokens.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = inline(SuccessResponse<AuthSession>)),
        (status = 400, description = "Missing field or unknown role", body = ErrorResponse),
        (status = 401, description = "Wrong password", body = ErrorResponse),
        (status = 404, description = "No user with this username and role", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/login")]
pub async fn login_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let role = match dto.role.parse::<Role>() {
        Ok(role) => role,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    login(&data, dto.username, dto.password, role).await
}

/// Admin login
#[utoipa::path(
    post,
    path = "/api/admin/login",
    tag = "admin",
    request_body = AdminLoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = inline(SuccessResponse<AuthSession>)),
        (status = 401, description = "Wrong password", body = ErrorResponse),
        (status = 404, description = "No admin with this username", body = ErrorResponse),
    )
)]
#[post("/api/admin/login")]
pub async fn admin_login_handler(
    req: web::Json<AdminLoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();
    login(&data, dto.username, dto.password, Role::Admin).await
}

async fn login(data: &AppState, username: String, password: String, role: Role) -> HttpResponse {
    let command = match LoginCommand::new(username, password, role) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    info!(username = %command.username(), role = %role, "Login attempt");

    match data.auth.login.execute(command).await {
        Ok(session) => {
            info!(user_id = %session.user.id, role = %session.role, "User logged in");
            ApiResponse::success(session)
        }

        Err(LoginError::UserNotFound) => {
            warn!(role = %role, "Login failed: user not found");
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(LoginError::InvalidPassword) => {
            ApiResponse::unauthorized("INVALID_PASSWORD", "Invalid password")
        }

        Err(LoginError::PasswordVerificationFailed(ref e)) => {
            error!(error = %e, "Password verification failed");
            ApiResponse::internal_error()
        }

        Err(LoginError::TokenGenerationFailed(ref e)) => {
            error!(error = %e, "Token generation failed");
            ApiResponse::internal_error()
        }

        Err(LoginError::QueryError(ref e)) => {
            error!(error = %e, "Database query failed");
            ApiResponse::internal_error()
        }
    }
}

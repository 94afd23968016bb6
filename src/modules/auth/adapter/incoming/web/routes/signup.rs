use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::Role;
use crate::auth::application::orchestrator::patient_signup::PatientSignupError;
use crate::auth::application::ports::incoming::use_cases::{
    AuthSession, CreateUserCommand, CreateUserInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

use super::account_errors::{create_user_command_error, create_user_error, require_fields};

#[derive(Debug, Deserialize, ToSchema)]
pub struct SignupRequest {
    #[schema(example = "jdoe")]
    pub username: String,

    #[schema(example = "secret1")]
    pub password: String,

    #[schema(example = "John Doe")]
    pub name: String,

    #[schema(example = "555-0100")]
    pub phone: Option<String>,

    #[schema(example = "john@example.com")]
    pub email: String,
}

/// Patient self-registration
///
/// Creates a patient account and logs it in.
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    tag = "auth",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "Account created", body = inline(SuccessResponse<AuthSession>)),
        (status = 400, description = "VALIDATION_ERROR, INVALID_EMAIL or PASSWORD_TOO_SHORT", body = ErrorResponse),
        (status = 409, description = "Username or email already taken", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/signup")]
pub async fn signup_handler(
    req: web::Json<SignupRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    if let Err(resp) = require_fields(&[&dto.username, &dto.password, &dto.name, &dto.email]) {
        return resp;
    }

    let command = match CreateUserCommand::new(
        CreateUserInput {
            username: dto.username,
            password: dto.password,
            name: dto.name,
            email: dto.email,
            phone: dto.phone,
            specialization: None,
            experience_years: None,
        },
        Role::Patient,
    ) {
        Ok(cmd) => cmd,
        Err(e) => return create_user_command_error(&e),
    };

    match data.auth.signup.signup(command).await {
        Ok(session) => {
            info!(user_id = %session.user.id, "Patient registered");
            ApiResponse::created(session)
        }

        Err(PatientSignupError::CreateUserFailed(ref e)) => create_user_error(e),

        Err(PatientSignupError::TokenGenerationFailed(ref e)) => {
            error!(error = %e, "Token generation failed after signup");
            ApiResponse::internal_error()
        }
    }
}

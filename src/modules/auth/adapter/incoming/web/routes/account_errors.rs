use actix_web::HttpResponse;
use tracing::error;

use crate::auth::application::ports::incoming::use_cases::{
    CreateUserCommandError, CreateUserError,
};
use crate::shared::api::ApiResponse;

/// Shared by self-service signup and the admin account forms.
pub fn create_user_command_error(e: &CreateUserCommandError) -> HttpResponse {
    match e {
        CreateUserCommandError::InvalidEmail => {
            ApiResponse::bad_request("INVALID_EMAIL", &e.to_string())
        }
        CreateUserCommandError::PasswordTooShort => {
            ApiResponse::bad_request("PASSWORD_TOO_SHORT", &e.to_string())
        }
        CreateUserCommandError::InvalidUsername
        | CreateUserCommandError::PasswordTooLong
        | CreateUserCommandError::EmptyName
        | CreateUserCommandError::NameTooLong
        | CreateUserCommandError::MissingSpecialization
        | CreateUserCommandError::InvalidExperience => {
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }
    }
}

pub fn create_user_error(e: &CreateUserError) -> HttpResponse {
    match e {
        CreateUserError::UserAlreadyExists => {
            ApiResponse::conflict("USER_ALREADY_EXISTS", "Username or email already exists")
        }
        CreateUserError::HashingFailed(msg) => {
            error!(error = %msg, "Password hashing failed");
            ApiResponse::internal_error()
        }
        CreateUserError::RepositoryError(msg) => {
            error!(error = %msg, "Failed to create user");
            ApiResponse::internal_error()
        }
    }
}

/// Every listed field must be present and non-blank.
pub fn require_fields(fields: &[&str]) -> Result<(), HttpResponse> {
    if fields.iter().any(|f| f.trim().is_empty()) {
        return Err(ApiResponse::bad_request(
            "VALIDATION_ERROR",
            "Please provide all required fields",
        ));
    }
    Ok(())
}

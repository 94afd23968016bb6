use crate::api::schemas::{ErrorResponse, MessageResponse, SuccessResponse};
use crate::auth::application::ports::incoming::use_cases::{
    ResetPasswordCommand, ResetPasswordCommandError, ResetPasswordError, SendOtpError,
    VerifyOtpError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SendOtpRequest {
    #[schema(example = "jdoe")]
    pub username: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct VerifyOtpRequest {
    #[schema(example = "jdoe")]
    pub username: String,

    #[schema(example = "042917")]
    pub otp: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ResetPasswordRequest {
    #[schema(example = "jdoe")]
    pub username: String,

    #[schema(example = "042917")]
    pub otp: String,

    #[schema(example = "new-secret")]
    pub new_password: String,
}

/// Send a password-reset code
#[utoipa::path(
    post,
    path = "/api/auth/send-otp",
    tag = "auth",
    request_body = SendOtpRequest,
    responses(
        (status = 200, description = "Code mailed", body = inline(SuccessResponse<MessageResponse>)),
        (status = 404, description = "Unknown user", body = ErrorResponse),
        (status = 502, description = "Mail relay rejected the message", body = ErrorResponse),
    )
)]
#[post("/api/auth/send-otp")]
pub async fn send_otp_handler(
    req: web::Json<SendOtpRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let username = req.username.trim();
    if username.is_empty() {
        return ApiResponse::bad_request("VALIDATION_ERROR", "Username is required");
    }

    match data.auth.send_otp.execute(username).await {
        Ok(()) => {
            info!(username = %username, "Password reset code sent");
            ApiResponse::success(MessageResponse::new("OTP sent to registered email"))
        }

        Err(SendOtpError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(SendOtpError::EmailDeliveryFailed(_)) => ApiResponse::bad_gateway(
            "EMAIL_DELIVERY_FAILED",
            "Failed to send OTP email",
        ),

        Err(SendOtpError::RepositoryError(ref e)) => {
            error!(error = %e, "Failed to store OTP");
            ApiResponse::internal_error()
        }
    }
}

/// Check a password-reset code without consuming it
#[utoipa::path(
    post,
    path = "/api/auth/verify-otp",
    tag = "auth",
    request_body = VerifyOtpRequest,
    responses(
        (status = 200, description = "Code is valid", body = inline(SuccessResponse<MessageResponse>)),
        (status = 400, description = "INVALID_OTP or OTP_EXPIRED", body = ErrorResponse),
        (status = 404, description = "Unknown user", body = ErrorResponse),
    )
)]
#[post("/api/auth/verify-otp")]
pub async fn verify_otp_handler(
    req: web::Json<VerifyOtpRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();
    if dto.username.trim().is_empty() || dto.otp.trim().is_empty() {
        return ApiResponse::bad_request("VALIDATION_ERROR", "Username and OTP are required");
    }

    match data
        .auth
        .verify_otp
        .execute(dto.username.trim(), dto.otp.trim())
        .await
    {
        Ok(()) => ApiResponse::success(MessageResponse::new("OTP verified")),

        Err(VerifyOtpError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(VerifyOtpError::InvalidOtp) => ApiResponse::bad_request("INVALID_OTP", "Invalid OTP"),

        Err(VerifyOtpError::OtpExpired) => {
            ApiResponse::bad_request("OTP_EXPIRED", "OTP has expired")
        }

        Err(VerifyOtpError::RepositoryError(ref e)) => {
            error!(error = %e, "Failed to verify OTP");
            ApiResponse::internal_error()
        }
    }
}

/// Set a new password using a reset code
#[utoipa::path(
    post,
    path = "/api/auth/reset-password",
    tag = "auth",
    request_body = ResetPasswordRequest,
    responses(
        (status = 200, description = "Password changed", body = inline(SuccessResponse<MessageResponse>)),
        (status = 400, description = "INVALID_OTP, OTP_EXPIRED or PASSWORD_TOO_SHORT", body = ErrorResponse),
        (status = 404, description = "Unknown user", body = ErrorResponse),
    )
)]
#[post("/api/auth/reset-password")]
pub async fn reset_password_handler(
    req: web::Json<ResetPasswordRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let command = match ResetPasswordCommand::new(dto.username, dto.otp, dto.new_password) {
        Ok(cmd) => cmd,
        Err(e @ ResetPasswordCommandError::PasswordTooShort) => {
            return ApiResponse::bad_request("PASSWORD_TOO_SHORT", &e.to_string())
        }
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.auth.reset_password.execute(command).await {
        Ok(()) => ApiResponse::success(MessageResponse::new("Password reset successful")),

        Err(ResetPasswordError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(ResetPasswordError::InvalidOtp) => {
            ApiResponse::bad_request("INVALID_OTP", "Invalid OTP")
        }

        Err(ResetPasswordError::OtpExpired) => {
            ApiResponse::bad_request("OTP_EXPIRED", "OTP has expired")
        }

        Err(ResetPasswordError::HashingFailed(ref e)) => {
            error!(error = %e, "Password hashing failed");
            ApiResponse::internal_error()
        }

        Err(ResetPasswordError::RepositoryError(ref e)) => {
            error!(error = %e, "Failed to reset password");
            ApiResponse::internal_error()
        }
    }
}

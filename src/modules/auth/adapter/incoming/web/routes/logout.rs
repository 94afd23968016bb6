use crate::api::schemas::{MessageResponse, SuccessResponse};
use crate::auth::application::ports::incoming::use_cases::{LogoutCommand, LogoutError};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct LogoutRequestDto {
    pub refresh_token: Option<String>,
}

/// Logout
///
/// Revokes the refresh token when one is supplied. Always succeeds.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    request_body(content = LogoutRequestDto, description = "Optional body"),
    responses(
        (status = 200, description = "Logged out", body = inline(SuccessResponse<MessageResponse>)),
    )
)]
#[post("/api/auth/logout")]
pub async fn logout_handler(
    req: Option<web::Json<LogoutRequestDto>>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.map(|r| r.into_inner()).unwrap_or_default();
    let command = LogoutCommand::new(dto.refresh_token);

    match data.auth.logout.execute(command).await {
        Ok(()) => info!("User logged out"),

        // The client drops its tokens regardless
        Err(LogoutError::TokenRevocationFailed(ref e)) => {
            error!(error = %e, "Token revocation failed during logout");
        }
        Err(LogoutError::DatabaseError(ref e)) => {
            error!(error = %e, "Blacklist store error during logout");
        }
    }

    ApiResponse::success(MessageResponse::new("Logged out successfully"))
}

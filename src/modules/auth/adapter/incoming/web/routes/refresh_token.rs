use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::ports::incoming::use_cases::{
    RefreshTokenCommand, RefreshTokenError, RefreshedToken,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, warn};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RefreshTokenRequestDto {
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub refresh_token: String,
}

/// Exchange a refresh token for a new access token
#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    tag = "auth",
    request_body = RefreshTokenRequestDto,
    responses(
        (status = 200, description = "New access token", body = inline(SuccessResponse<RefreshedToken>)),
        (status = 401, description = "INVALID_TOKEN, TOKEN_EXPIRED or TOKEN_REVOKED", body = ErrorResponse),
    )
)]
#[post("/api/auth/refresh")]
pub async fn refresh_token_handler(
    req: web::Json<RefreshTokenRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(command) = RefreshTokenCommand::new(req.into_inner().refresh_token) else {
        return ApiResponse::bad_request("VALIDATION_ERROR", "Refresh token is required");
    };

    match data.auth.refresh_token.execute(command).await {
        Ok(token) => ApiResponse::success(token),

        Err(RefreshTokenError::InvalidToken) => {
            ApiResponse::unauthorized("INVALID_TOKEN", "Invalid refresh token")
        }

        Err(RefreshTokenError::TokenExpired) => {
            ApiResponse::unauthorized("TOKEN_EXPIRED", "Refresh token has expired")
        }

        Err(RefreshTokenError::TokenRevoked) => {
            warn!("Revoked refresh token presented");
            ApiResponse::unauthorized("TOKEN_REVOKED", "Refresh token has been revoked")
        }

        Err(RefreshTokenError::BlacklistCheckFailed(ref e)) => {
            error!(error = %e, "Token blacklist lookup failed");
            ApiResponse::internal_error()
        }

        Err(RefreshTokenError::TokenGenerationFailed(ref e)) => {
            error!(error = %e, "Token generation failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::ports::incoming::use_cases::RefreshTokenUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;

    struct MockRefresh(Result<RefreshedToken, RefreshTokenError>);

    #[async_trait]
    impl RefreshTokenUseCase for MockRefresh {
        async fn execute(
            &self,
            _command: RefreshTokenCommand,
        ) -> Result<RefreshedToken, RefreshTokenError> {
            self.0.clone()
        }
    }

    async fn call(
        result: Result<RefreshedToken, RefreshTokenError>,
        token: &str,
    ) -> (u16, serde_json::Value) {
        let app_state = TestAppStateBuilder::default()
            .with_refresh_token(MockRefresh(result))
            .build();
        let app =
            test::init_service(App::new().app_data(app_state).service(refresh_token_handler))
                .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/refresh")
            .set_json(serde_json::json!({ "refresh_token": token }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_refresh_success() {
        let (status, body) = call(
            Ok(RefreshedToken {
                access_token: "new-access".to_string(),
            }),
            "refresh",
        )
        .await;

        assert_eq!(status, 200);
        assert_eq!(body["data"]["access_token"], "new-access");
    }

    #[actix_web::test]
    async fn test_refresh_blank_token() {
        let (status, body) = call(Err(RefreshTokenError::InvalidToken), "  ").await;

        assert_eq!(status, 400);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn test_refresh_error_mapping() {
        let cases = vec![
            (RefreshTokenError::InvalidToken, 401, "INVALID_TOKEN"),
            (RefreshTokenError::TokenExpired, 401, "TOKEN_EXPIRED"),
            (RefreshTokenError::TokenRevoked, 401, "TOKEN_REVOKED"),
            (
                RefreshTokenError::BlacklistCheckFailed("redis".into()),
                500,
                "INTERNAL_ERROR",
            ),
            (
                RefreshTokenError::TokenGenerationFailed("jwt".into()),
                500,
                "INTERNAL_ERROR",
            ),
        ];

        for (error, status, code) in cases {
            let (actual, body) = call(Err(error), "refresh").await;
            assert_eq!(actual, status, "code: {}", code);
            assert_eq!(body["error"]["code"], code);
        }
    }
}

use crate::admin::application::ports::incoming::use_cases::{DeleteUserError, ListUsersError};
use crate::api::schemas::{ErrorResponse, MessageResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::auth::adapter::incoming::web::routes::account_errors::{
    create_user_command_error, create_user_error, require_fields,
};
use crate::auth::application::domain::entities::{Role, UserId, UserProfile};
use crate::auth::application::ports::incoming::use_cases::{CreateUserCommand, CreateUserInput};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{delete, get, post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

pub(super) fn list_response(
    result: Result<Vec<UserProfile>, ListUsersError>,
) -> HttpResponse {
    match result {
        Ok(users) => ApiResponse::success(users),

        Err(ListUsersError::RepositoryError(ref e)) => {
            error!(error = %e, "Failed to list users");
            ApiResponse::internal_error()
        }
    }
}

/// Maps the outcome of an account deletion. `not_found` is the error code
/// used when the account is missing or has another role.
pub(super) fn delete_response(
    result: Result<(), DeleteUserError>,
    user_id: UserId,
    not_found: (&str, &str),
    deleted: &str,
) -> HttpResponse {
    match result {
        Ok(()) => ApiResponse::success(MessageResponse::new(deleted)),

        Err(DeleteUserError::NotFound) => ApiResponse::not_found(not_found.0, not_found.1),

        Err(DeleteUserError::DoctorHasAppointments) => ApiResponse::bad_request(
            "DOCTOR_HAS_APPOINTMENTS",
            "Cannot delete doctor with existing appointments",
        ),

        Err(DeleteUserError::RepositoryError(ref e)) => {
            error!(%user_id, error = %e, "Failed to delete account");
            ApiResponse::internal_error()
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    #[schema(example = "nurse.joy")]
    pub username: String,
    pub password: String,
    #[schema(example = "patient")]
    pub role: String,
    pub name: String,
    pub phone: Option<String>,
    pub email: String,
}

/// Every account
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = "admin",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Accounts ordered by name", body = inline(SuccessResponse<Vec<UserProfile>>)),
    )
)]
#[get("/api/admin/users")]
pub async fn list_users_handler(_admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    list_response(data.admin.list_users.execute(None).await)
}

/// Create an account of any role
#[utoipa::path(
    post,
    path = "/api/admin/users",
    tag = "admin",
    security(("bearer_auth" = [])),
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "Account created", body = inline(SuccessResponse<UserProfile>)),
        (status = 400, description = "VALIDATION_ERROR, INVALID_EMAIL or PASSWORD_TOO_SHORT", body = ErrorResponse),
        (status = 409, description = "USER_ALREADY_EXISTS", body = ErrorResponse),
    )
)]
#[post("/api/admin/users")]
pub async fn create_user_handler(
    admin: AdminUser,
    req: web::Json<CreateUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    if let Err(resp) = require_fields(&[&dto.username, &dto.password, &dto.name, &dto.email]) {
        return resp;
    }

    let Ok(role) = dto.role.parse::<Role>() else {
        return ApiResponse::bad_request(
            "VALIDATION_ERROR",
            "Role must be one of admin, doctor or patient",
        );
    };

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
        role,
    ) {
        Ok(cmd) => cmd,
        Err(e) => return create_user_command_error(&e),
    };

    match data.auth.create_user.execute(command).await {
        Ok(profile) => {
            info!(admin_id = %admin.user_id, user_id = %profile.id, %role, "Account created by admin");
            ApiResponse::created(profile)
        }
        Err(e) => create_user_error(&e),
    }
}

/// Delete an account and everything it owns
#[utoipa::path(
    delete,
    path = "/api/admin/users/{id}",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "Deleted", body = inline(SuccessResponse<MessageResponse>)),
        (status = 404, description = "USER_NOT_FOUND", body = ErrorResponse),
    )
)]
#[delete("/api/admin/users/{id}")]
pub async fn delete_user_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = UserId::from(path.into_inner());
    let result = data.admin.delete_user.execute(user_id, None).await;

    delete_response(
        result,
        user_id,
        ("USER_NOT_FOUND", "User not found"),
        "User removed successfully",
    )
}

use crate::admin::application::domain::entities::DoctorWithStats;
use crate::admin::application::ports::incoming::use_cases::DoctorStatsError;
use crate::api::schemas::{ErrorResponse, MessageResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::auth::adapter::incoming::web::routes::account_errors::{
    create_user_command_error, create_user_error, require_fields,
};
use crate::auth::application::domain::entities::{Role, UserId, UserProfile};
use crate::auth::application::ports::incoming::use_cases::{CreateUserCommand, CreateUserInput};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{delete, get, post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

use super::users::delete_response;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateDoctorRequest {
    #[schema(example = "house")]
    pub username: String,
    pub password: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    #[schema(example = "Cardiology")]
    pub specialization: String,
    /// Years of practice
    #[serde(alias = "experience")]
    #[schema(example = 12)]
    pub experience_years: Option<i32>,
}

/// Doctors with today's and overall workload
#[utoipa::path(
    get,
    path = "/api/admin/doctors",
    tag = "admin",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Doctors with workload counters", body = inline(SuccessResponse<Vec<DoctorWithStats>>)),
    )
)]
#[get("/api/admin/doctors")]
pub async fn list_doctors_handler(_admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.admin.doctors.execute().await {
        Ok(doctors) => ApiResponse::success(doctors),

        Err(DoctorStatsError::RepositoryError(ref e)) => {
            error!(error = %e, "Failed to fetch doctors");
            ApiResponse::internal_error()
        }
    }
}

/// Register a doctor
#[utoipa::path(
    post,
    path = "/api/admin/doctors",
    tag = "admin",
    security(("bearer_auth" = [])),
    request_body = CreateDoctorRequest,
    responses(
        (status = 201, description = "Doctor created", body = inline(SuccessResponse<UserProfile>)),
        (status = 400, description = "VALIDATION_ERROR", body = ErrorResponse),
        (status = 409, description = "USER_ALREADY_EXISTS", body = ErrorResponse),
    )
)]
#[post("/api/admin/doctors")]
pub async fn create_doctor_handler(
    admin: AdminUser,
    req: web::Json<CreateDoctorRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    if let Err(resp) = require_fields(&[
        &dto.username,
        &dto.password,
        &dto.name,
        &dto.email,
        &dto.specialization,
    ]) {
        return resp;
    }

    let command = match CreateUserCommand::new_doctor(CreateUserInput {
        username: dto.username,
        password: dto.password,
        name: dto.name,
        email: dto.email,
        phone: dto.phone,
        specialization: Some(dto.specialization),
        experience_years: dto.experience_years,
    }) {
        Ok(cmd) => cmd,
        Err(e) => return create_user_command_error(&e),
    };

    match data.auth.create_user.execute(command).await {
        Ok(profile) => {
            info!(admin_id = %admin.user_id, doctor_id = %profile.id, "Doctor registered");
            ApiResponse::created(profile)
        }
        Err(e) => create_user_error(&e),
    }
}

/// Delete a doctor without appointments
#[utoipa::path(
    delete,
    path = "/api/admin/doctors/{id}",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Doctor ID")),
    responses(
        (status = 200, description = "Deleted", body = inline(SuccessResponse<MessageResponse>)),
        (status = 400, description = "DOCTOR_HAS_APPOINTMENTS", body = ErrorResponse),
        (status = 404, description = "DOCTOR_NOT_FOUND", body = ErrorResponse),
    )
)]
#[delete("/api/admin/doctors/{id}")]
pub async fn delete_doctor_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let doctor_id = UserId::from(path.into_inner());
    let result = data
        .admin
        .delete_user
        .execute(doctor_id, Some(Role::Doctor))
        .await;

    delete_response(
        result,
        doctor_id,
        ("DOCTOR_NOT_FOUND", "Doctor not found"),
        "Doctor deleted successfully",
    )
}

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::directory::application::domain::entities::{DoctorContact, DoctorListing};
use crate::directory::application::ports::incoming::use_cases::ListDoctorsError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::error;

/// Doctors with contact details and specialization
#[utoipa::path(
    get,
    path = "/api/public/doctors",
    tag = "directory",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Doctors ordered by name", body = inline(SuccessResponse<Vec<DoctorListing>>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
#[get("/api/public/doctors")]
pub async fn public_doctors_handler(
    _user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.directory.doctors.execute().await {
        Ok(doctors) => ApiResponse::success(doctors),

        Err(ListDoctorsError::RepositoryError(ref e)) => {
            error!(error = %e, "Failed to list doctors");
            ApiResponse::internal_error()
        }
    }
}

/// Doctor names and e-mails, no sign-in required
#[utoipa::path(
    get,
    path = "/api/users/doctors",
    tag = "directory",
    responses(
        (status = 200, description = "Doctors ordered by name", body = inline(SuccessResponse<Vec<DoctorContact>>)),
    )
)]
#[get("/api/users/doctors")]
pub async fn doctor_contacts_handler(data: web::Data<AppState>) -> impl Responder {
    match data.directory.doctors.execute().await {
        Ok(doctors) => ApiResponse::success(
            doctors
                .into_iter()
                .map(DoctorContact::from)
                .collect::<Vec<_>>(),
        ),

        Err(ListDoctorsError::RepositoryError(ref e)) => {
            error!(error = %e, "Failed to list doctors");
            ApiResponse::internal_error()
        }
    }
}

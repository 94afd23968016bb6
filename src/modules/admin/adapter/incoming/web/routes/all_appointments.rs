use crate::admin::application::ports::incoming::use_cases::AllAppointmentsError;
use crate::api::schemas::SuccessResponse;
use crate::appointment::application::domain::entities::AppointmentView;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::error;

/// Every appointment with patient and doctor
#[utoipa::path(
    get,
    path = "/api/admin/all-appointments",
    tag = "admin",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Newest first", body = inline(SuccessResponse<Vec<AppointmentView>>)),
    )
)]
#[get("/api/admin/all-appointments")]
pub async fn all_appointments_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.admin.all_appointments.execute().await {
        Ok(appointments) => ApiResponse::success(appointments),

        Err(AllAppointmentsError::RepositoryError(ref e)) => {
            error!(error = %e, "Failed to list all appointments");
            ApiResponse::internal_error()
        }
    }
}

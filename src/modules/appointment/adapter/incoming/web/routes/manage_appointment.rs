use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::appointment::application::domain::entities::{Appointment, Feedback};
use crate::appointment::application::ports::incoming::use_cases::{
    CancelAppointmentError, SubmitFeedbackError,
};
use crate::auth::adapter::incoming::web::extractors::PatientUser;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

/// Cancel one of the caller's appointments
#[utoipa::path(
    put,
    path = "/api/appointments/{id}/cancel",
    tag = "appointments",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Appointment ID")),
    responses(
        (status = 200, description = "Appointment cancelled", body = inline(SuccessResponse<Appointment>)),
        (status = 400, description = "INVALID_STATUS", body = ErrorResponse),
        (status = 403, description = "NOT_APPOINTMENT_OWNER", body = ErrorResponse),
        (status = 404, description = "APPOINTMENT_NOT_FOUND", body = ErrorResponse),
    )
)]
#[put("/api/appointments/{id}/cancel")]
pub async fn cancel_appointment_handler(
    patient: PatientUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let appointment_id = path.into_inner();

    match data
        .appointment
        .cancel
        .execute(patient.user_id, appointment_id)
        .await
    {
        Ok(appointment) => {
            info!(%appointment_id, patient_id = %patient.user_id, "Appointment cancelled");
            ApiResponse::success(appointment)
        }

        Err(CancelAppointmentError::NotFound) => {
            ApiResponse::not_found("APPOINTMENT_NOT_FOUND", "Appointment not found")
        }

        Err(CancelAppointmentError::NotOwner) => {
            warn!(%appointment_id, patient_id = %patient.user_id, "Cancel by non-owner");
            ApiResponse::forbidden(
                "NOT_APPOINTMENT_OWNER",
                "Not authorized to cancel this appointment",
            )
        }

        Err(e @ CancelAppointmentError::InvalidStatus(_)) => {
            ApiResponse::bad_request("INVALID_STATUS", &e.to_string())
        }

        Err(CancelAppointmentError::RepositoryError(ref e)) => {
            error!(%appointment_id, error = %e, "Failed to cancel appointment");
            ApiResponse::internal_error()
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct FeedbackRequest {
    #[schema(minimum = 1, maximum = 5, example = 5)]
    pub rating: i64,
    pub comment: Option<String>,
}

/// Rate an appointment
#[utoipa::path(
    put,
    path = "/api/appointments/{id}/feedback",
    tag = "appointments",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Appointment ID")),
    request_body = FeedbackRequest,
    responses(
        (status = 200, description = "Feedback stored", body = inline(SuccessResponse<Appointment>)),
        (status = 400, description = "INVALID_RATING", body = ErrorResponse),
        (status = 403, description = "NOT_APPOINTMENT_OWNER", body = ErrorResponse),
        (status = 404, description = "APPOINTMENT_NOT_FOUND", body = ErrorResponse),
    )
)]
#[put("/api/appointments/{id}/feedback")]
pub async fn submit_feedback_handler(
    patient: PatientUser,
    path: web::Path<Uuid>,
    req: web::Json<FeedbackRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let appointment_id = path.into_inner();
    let req = req.into_inner();

    let feedback = match Feedback::new(req.rating, req.comment) {
        Ok(f) => f,
        Err(e) => return ApiResponse::bad_request("INVALID_RATING", &e.to_string()),
    };

    match data
        .appointment
        .feedback
        .execute(patient.user_id, appointment_id, feedback)
        .await
    {
        Ok(appointment) => ApiResponse::success(appointment),

        Err(SubmitFeedbackError::NotFound) => {
            ApiResponse::not_found("APPOINTMENT_NOT_FOUND", "Appointment not found")
        }

        Err(SubmitFeedbackError::NotOwner) => ApiResponse::forbidden(
            "NOT_APPOINTMENT_OWNER",
            "Not authorized to provide feedback for this appointment",
        ),

        Err(SubmitFeedbackError::RepositoryError(ref e)) => {
            error!(%appointment_id, error = %e, "Failed to store feedback");
            ApiResponse::internal_error()
        }
    }
}

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::appointment::application::domain::entities::AppointmentView;
use crate::appointment::application::ports::incoming::use_cases::{
    AvailableSlotsError, BookAppointmentCommand, BookAppointmentError,
};
use crate::auth::adapter::incoming::web::extractors::{AuthenticatedUser, PatientUser};
use crate::auth::application::domain::entities::UserId;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, post, web, Responder};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
pub struct BookAppointmentRequest {
    pub doctor_id: Uuid,
    /// Slot start, RFC 3339
    #[schema(value_type = String, format = DateTime, example = "2030-01-07T09:00:00Z")]
    pub date: DateTime<Utc>,
}

/// Book an appointment slot
///
/// The patient is the caller. A confirmation e-mail is sent in the background.
#[utoipa::path(
    post,
    path = "/api/appointments/book",
    tag = "appointments",
    security(("bearer_auth" = [])),
    request_body = BookAppointmentRequest,
    responses(
        (status = 201, description = "Appointment booked", body = inline(SuccessResponse<AppointmentView>)),
        (status = 400, description = "OUTSIDE_BUSINESS_HOURS or APPOINTMENT_IN_PAST", body = ErrorResponse),
        (status = 404, description = "DOCTOR_NOT_FOUND or PATIENT_NOT_FOUND", body = ErrorResponse),
        (status = 409, description = "SLOT_ALREADY_BOOKED", body = ErrorResponse),
    )
)]
#[post("/api/appointments/book")]
pub async fn book_appointment_handler(
    patient: PatientUser,
    req: web::Json<BookAppointmentRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let command = BookAppointmentCommand {
        patient_id: patient.user_id,
        doctor_id: UserId::from(req.doctor_id),
        date: req.date,
    };

    match data.appointment.book.book(command).await {
        Ok(view) => ApiResponse::created(view),

        Err(BookAppointmentError::OutsideBusinessHours) => ApiResponse::bad_request(
            "OUTSIDE_BUSINESS_HOURS",
            "Appointments can only be booked Monday to Friday, 9 AM to 4 PM",
        ),

        Err(BookAppointmentError::InPast) => {
            ApiResponse::bad_request("APPOINTMENT_IN_PAST", "Cannot book appointments in the past")
        }

        Err(BookAppointmentError::DoctorNotFound) => {
            ApiResponse::not_found("DOCTOR_NOT_FOUND", "Doctor not found")
        }

        Err(BookAppointmentError::PatientNotFound) => {
            ApiResponse::not_found("PATIENT_NOT_FOUND", "Patient not found")
        }

        Err(BookAppointmentError::SlotTaken) => {
            ApiResponse::conflict("SLOT_ALREADY_BOOKED", "This slot is already booked")
        }

        Err(BookAppointmentError::RepositoryError(ref e)) => {
            error!(patient_id = %patient.user_id, error = %e, "Booking failed");
            ApiResponse::internal_error()
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AvailableSlotsQuery {
    pub doctor_id: Uuid,
    /// Clinic calendar day, `YYYY-MM-DD`
    #[param(value_type = String, example = "2030-01-07")]
    pub date: NaiveDate,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AvailableSlotsResponse {
    #[schema(value_type = Vec<String>)]
    pub available_slots: Vec<DateTime<Utc>>,
}

/// Free slots of a doctor on one day
#[utoipa::path(
    get,
    path = "/api/appointments/available-slots",
    tag = "appointments",
    security(("bearer_auth" = [])),
    params(AvailableSlotsQuery),
    responses(
        (status = 200, description = "Slots still open for booking", body = inline(SuccessResponse<AvailableSlotsResponse>)),
        (status = 400, description = "Missing or malformed query", body = ErrorResponse),
    )
)]
#[get("/api/appointments/available-slots")]
pub async fn available_slots_handler(
    _user: AuthenticatedUser,
    query: web::Query<AvailableSlotsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();

    match data
        .appointment
        .available_slots
        .execute(UserId::from(query.doctor_id), query.date)
        .await
    {
        Ok(available_slots) => ApiResponse::success(AvailableSlotsResponse { available_slots }),

        Err(AvailableSlotsError::RepositoryError(ref e)) => {
            error!(doctor_id = %query.doctor_id, error = %e, "Failed to load available slots");
            ApiResponse::internal_error()
        }
    }
}

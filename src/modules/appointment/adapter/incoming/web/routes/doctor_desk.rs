use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::appointment::application::domain::entities::DoctorPatient;
use crate::appointment::application::ports::incoming::use_cases::{
    Attendance, CloseAppointmentCommand, CloseAppointmentError, ClosedAppointment,
    DoctorOverviewError,
};
use crate::auth::adapter::incoming::web::extractors::DoctorUser;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CloseAppointmentRequest {
    pub appointment_id: Uuid,
    #[schema(example = "Seasonal influenza")]
    pub diagnosis: String,
    pub symptoms: Option<String>,
    #[serde(default)]
    pub medications: Vec<String>,
    pub notes: Option<String>,
}

/// Complete an appointment and file its medical record
#[utoipa::path(
    post,
    path = "/api/doctor/appointments/close",
    tag = "doctor",
    security(("bearer_auth" = [])),
    request_body = CloseAppointmentRequest,
    responses(
        (status = 200, description = "Appointment completed", body = inline(SuccessResponse<ClosedAppointment>)),
        (status = 400, description = "VALIDATION_ERROR or INVALID_STATUS", body = ErrorResponse),
        (status = 404, description = "Unknown appointment or another doctor's", body = ErrorResponse),
    )
)]
#[post("/api/doctor/appointments/close")]
pub async fn close_appointment_handler(
    doctor: DoctorUser,
    req: web::Json<CloseAppointmentRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let command = match CloseAppointmentCommand::new(
        req.appointment_id,
        req.diagnosis,
        req.symptoms,
        req.medications,
        req.notes,
    ) {
        Ok(c) => c,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.appointment.close.execute(doctor.user_id, command).await {
        Ok(closed) => {
            info!(
                appointment_id = %closed.appointment.id,
                doctor_id = %doctor.user_id,
                "Appointment closed"
            );
            ApiResponse::success(closed)
        }

        Err(CloseAppointmentError::NotFound) => ApiResponse::not_found(
            "APPOINTMENT_NOT_FOUND",
            "Appointment not found or access denied",
        ),

        Err(e @ CloseAppointmentError::InvalidStatus(_)) => {
            ApiResponse::bad_request("INVALID_STATUS", &e.to_string())
        }

        Err(CloseAppointmentError::RepositoryError(ref e)) => {
            error!(doctor_id = %doctor.user_id, error = %e, "Failed to close appointment");
            ApiResponse::internal_error()
        }
    }
}

/// Number of appointments the calling doctor has completed
#[utoipa::path(
    get,
    path = "/api/doctor/attendance",
    tag = "doctor",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Completed appointment count", body = inline(SuccessResponse<Attendance>)),
    )
)]
#[get("/api/doctor/attendance")]
pub async fn attendance_handler(doctor: DoctorUser, data: web::Data<AppState>) -> impl Responder {
    match data.appointment.attendance.execute(doctor.user_id).await {
        Ok(attendance) => ApiResponse::success(attendance),

        Err(DoctorOverviewError::RepositoryError(ref e)) => {
            error!(doctor_id = %doctor.user_id, error = %e, "Failed to count attendance");
            ApiResponse::internal_error()
        }
    }
}

/// Patients the calling doctor has appointments with
#[utoipa::path(
    get,
    path = "/api/doctor/patients",
    tag = "doctor",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Patients with visit counts", body = inline(SuccessResponse<Vec<DoctorPatient>>)),
    )
)]
#[get("/api/doctor/patients")]
pub async fn doctor_patients_handler(
    doctor: DoctorUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.appointment.patients.execute(doctor.user_id).await {
        Ok(patients) => ApiResponse::success(patients),

        Err(DoctorOverviewError::RepositoryError(ref e)) => {
            error!(doctor_id = %doctor.user_id, error = %e, "Failed to list doctor's patients");
            ApiResponse::internal_error()
        }
    }
}

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::appointment::application::domain::entities::AppointmentView;
use crate::appointment::application::ports::incoming::use_cases::ListAppointmentsError;
use crate::auth::adapter::incoming::web::extractors::{AuthenticatedUser, DoctorUser, PatientUser};
use crate::auth::application::domain::entities::UserId;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, HttpResponse, Responder};
use tracing::{error, warn};
use uuid::Uuid;

fn respond(
    result: Result<Vec<AppointmentView>, ListAppointmentsError>,
    owner: UserId,
) -> HttpResponse {
    match result {
        Ok(appointments) => ApiResponse::success(appointments),

        Err(ListAppointmentsError::Forbidden) => {
            warn!(%owner, "Appointment list access denied");
            ApiResponse::forbidden(
                "ACCESS_DENIED",
                "You do not have permission to view these appointments",
            )
        }

        Err(ListAppointmentsError::RepositoryError(ref e)) => {
            error!(%owner, error = %e, "Failed to list appointments");
            ApiResponse::internal_error()
        }
    }
}

/// A patient's appointments, newest first
#[utoipa::path(
    get,
    path = "/api/appointments/patient/{patient_id}",
    tag = "appointments",
    security(("bearer_auth" = [])),
    params(("patient_id" = Uuid, Path, description = "Patient ID")),
    responses(
        (status = 200, description = "Appointments with doctor details", body = inline(SuccessResponse<Vec<AppointmentView>>)),
        (status = 403, description = "Not the patient nor an admin", body = ErrorResponse),
    )
)]
#[get("/api/appointments/patient/{patient_id}")]
pub async fn patient_appointments_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let patient_id = UserId::from(path.into_inner());
    let result = data
        .appointment
        .list_for_patient
        .execute(user.actor(), patient_id)
        .await;

    respond(result, patient_id)
}

/// A doctor's appointments, oldest first
#[utoipa::path(
    get,
    path = "/api/appointments/doctor/{doctor_id}",
    tag = "appointments",
    security(("bearer_auth" = [])),
    params(("doctor_id" = Uuid, Path, description = "Doctor ID")),
    responses(
        (status = 200, description = "Appointments with patient details", body = inline(SuccessResponse<Vec<AppointmentView>>)),
        (status = 403, description = "Not the doctor nor an admin", body = ErrorResponse),
    )
)]
#[get("/api/appointments/doctor/{doctor_id}")]
pub async fn doctor_appointments_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let doctor_id = UserId::from(path.into_inner());
    let result = data
        .appointment
        .list_for_doctor
        .execute(user.actor(), doctor_id)
        .await;

    respond(result, doctor_id)
}

/// The calling patient's appointments
#[utoipa::path(
    get,
    path = "/api/patient/appointments",
    tag = "patient",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Own appointments", body = inline(SuccessResponse<Vec<AppointmentView>>)),
    )
)]
#[get("/api/patient/appointments")]
pub async fn my_patient_appointments_handler(
    patient: PatientUser,
    data: web::Data<AppState>,
) -> impl Responder {
    let result = data
        .appointment
        .list_for_patient
        .execute(patient.actor(), patient.user_id)
        .await;

    respond(result, patient.user_id)
}

/// The calling doctor's appointments
#[utoipa::path(
    get,
    path = "/api/doctor/appointments",
    tag = "doctor",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Own appointments", body = inline(SuccessResponse<Vec<AppointmentView>>)),
    )
)]
#[get("/api/doctor/appointments")]
pub async fn my_doctor_appointments_handler(
    doctor: DoctorUser,
    data: web::Data<AppState>,
) -> impl Responder {
    let result = data
        .appointment
        .list_for_doctor
        .execute(doctor.actor(), doctor.user_id)
        .await;

    respond(result, doctor.user_id)
}

/// The calling doctor's appointments on the current clinic day
#[utoipa::path(
    get,
    path = "/api/doctor/appointments/today",
    tag = "doctor",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Today's non-cancelled appointments", body = inline(SuccessResponse<Vec<AppointmentView>>)),
    )
)]
#[get("/api/doctor/appointments/today")]
pub async fn today_appointments_handler(
    doctor: DoctorUser,
    data: web::Data<AppState>,
) -> impl Responder {
    let result = data.appointment.today.execute(doctor.user_id).await;

    respond(result, doctor.user_id)
}

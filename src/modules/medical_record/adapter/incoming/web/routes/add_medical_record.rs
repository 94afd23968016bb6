use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::DoctorUser;
use crate::auth::application::domain::entities::UserId;
use crate::medical_record::application::domain::entities::MedicalRecordView;
use crate::medical_record::application::ports::incoming::use_cases::{
    AddMedicalRecordCommand, AddMedicalRecordError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddMedicalRecordRequest {
    #[schema(example = "Hypertension")]
    pub diagnosis: String,
    #[serde(default)]
    pub symptoms: String,
    #[serde(default)]
    pub medications: Vec<String>,
    pub notes: Option<String>,
}

/// File a medical record for a patient
#[utoipa::path(
    post,
    path = "/api/patients/{id}/medical-records",
    tag = "patients",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Patient ID")),
    request_body = AddMedicalRecordRequest,
    responses(
        (status = 201, description = "Record created", body = inline(SuccessResponse<MedicalRecordView>)),
        (status = 400, description = "VALIDATION_ERROR", body = ErrorResponse),
        (status = 403, description = "Caller is not a doctor", body = ErrorResponse),
        (status = 404, description = "PATIENT_NOT_FOUND", body = ErrorResponse),
    )
)]
#[post("/api/patients/{id}/medical-records")]
pub async fn add_medical_record_handler(
    doctor: DoctorUser,
    path: web::Path<Uuid>,
    req: web::Json<AddMedicalRecordRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let patient_id = UserId::from(path.into_inner());
    let req = req.into_inner();

    let command = match AddMedicalRecordCommand::new(
        req.diagnosis,
        req.symptoms,
        req.medications,
        req.notes,
    ) {
        Ok(c) => c,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data
        .medical_record
        .add
        .execute(doctor.user_id, patient_id, command)
        .await
    {
        Ok(view) => ApiResponse::created(view),

        Err(AddMedicalRecordError::PatientNotFound) => {
            ApiResponse::not_found("PATIENT_NOT_FOUND", "Patient not found")
        }

        Err(AddMedicalRecordError::RepositoryError(ref e)) => {
            error!(%patient_id, doctor_id = %doctor.user_id, error = %e, "Failed to add medical record");
            ApiResponse::internal_error()
        }
    }
}

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::{AuthenticatedUser, PatientUser};
use crate::auth::application::domain::entities::UserId;
use crate::medical_record::application::domain::entities::MedicalRecordView;
use crate::medical_record::application::ports::incoming::use_cases::GetMedicalHistoryError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

fn respond(
    result: Result<Vec<MedicalRecordView>, GetMedicalHistoryError>,
    patient_id: UserId,
) -> HttpResponse {
    match result {
        Ok(records) => ApiResponse::success(records),

        Err(GetMedicalHistoryError::Forbidden) => ApiResponse::forbidden(
            "ACCESS_DENIED",
            "Not authorized to view this medical history",
        ),

        Err(GetMedicalHistoryError::RepositoryError(ref e)) => {
            error!(%patient_id, error = %e, "Failed to load medical history");
            ApiResponse::internal_error()
        }
    }
}

/// A patient's medical history, newest first
#[utoipa::path(
    get,
    path = "/api/patients/{id}/medical-history",
    tag = "patients",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Patient ID")),
    responses(
        (status = 200, description = "Records with the authoring doctor", body = inline(SuccessResponse<Vec<MedicalRecordView>>)),
        (status = 403, description = "Another patient's history", body = ErrorResponse),
    )
)]
#[get("/api/patients/{id}/medical-history")]
pub async fn medical_history_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let patient_id = UserId::from(path.into_inner());
    let result = data
        .medical_record
        .history
        .execute(user.actor(), patient_id)
        .await;

    respond(result, patient_id)
}

/// The calling patient's medical records
#[utoipa::path(
    get,
    path = "/api/patient/medical-records",
    tag = "patient",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Own records", body = inline(SuccessResponse<Vec<MedicalRecordView>>)),
    )
)]
#[get("/api/patient/medical-records")]
pub async fn my_medical_records_handler(
    patient: PatientUser,
    data: web::Data<AppState>,
) -> impl Responder {
    let result = data
        .medical_record
        .history
        .execute(patient.actor(), patient.user_id)
        .await;

    respond(result, patient.user_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::Actor;
    use crate::medical_record::application::domain::entities::MedicalRecord;
    use crate::medical_record::application::ports::incoming::use_cases::GetMedicalHistoryUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, token_data, StubTokenProvider};
    use actix_web::{test, App};
    use async_trait::async_trait;
    use chrono::Utc;

    struct MockHistory(Option<GetMedicalHistoryError>);

    #[async_trait]
    impl GetMedicalHistoryUseCase for MockHistory {
        async fn execute(
            &self,
            _actor: Actor,
            patient_id: UserId,
        ) -> Result<Vec<MedicalRecordView>, GetMedicalHistoryError> {
            if let Some(e) = &self.0 {
                return Err(e.clone());
            }
            let now = Utc::now();
            Ok(vec![MedicalRecordView {
                record: MedicalRecord {
                    id: Uuid::new_v4(),
                    patient_id: patient_id.value(),
                    doctor_id: Uuid::new_v4(),
                    appointment_id: None,
                    date: now,
                    diagnosis: "Asthma".to_string(),
                    symptoms: None,
                    medications: vec!["Salbutamol".to_string()],
                    notes: None,
                    created_at: now,
                },
                doctor: None,
            }])
        }
    }

    async fn get(
        error: Option<GetMedicalHistoryError>,
        provider: StubTokenProvider,
        uri: &str,
    ) -> (u16, serde_json::Value) {
        let app_state = TestAppStateBuilder::default()
            .with_medical_history(MockHistory(error))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_data(provider))
                .service(medical_history_handler)
                .service(my_medical_records_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(uri)
            .insert_header(bearer())
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_history_success() {
        let patient_id = Uuid::new_v4();

        let (status, body) = get(
            None,
            StubTokenProvider::doctor(Uuid::new_v4()),
            &format!("/api/patients/{}/medical-history", patient_id),
        )
        .await;

        assert_eq!(status, 200);
        assert_eq!(body["data"][0]["diagnosis"], "Asthma");
        assert_eq!(body["data"][0]["patient_id"], patient_id.to_string());
    }

    #[actix_web::test]
    async fn test_history_forbidden() {
        let (status, body) = get(
            Some(GetMedicalHistoryError::Forbidden),
            StubTokenProvider::patient(Uuid::new_v4()),
            &format!("/api/patients/{}/medical-history", Uuid::new_v4()),
        )
        .await;

        assert_eq!(status, 403);
        assert_eq!(body["error"]["code"], "ACCESS_DENIED");
    }

    #[actix_web::test]
    async fn test_own_records() {
        let patient_id = Uuid::new_v4();

        let (status, body) = get(
            None,
            StubTokenProvider::patient(patient_id),
            "/api/patient/medical-records",
        )
        .await;

        assert_eq!(status, 200);
        assert_eq!(body["data"][0]["patient_id"], patient_id.to_string());
    }

    #[actix_web::test]
    async fn test_own_records_patients_only() {
        let (status, _) = get(
            None,
            StubTokenProvider::doctor(Uuid::new_v4()),
            "/api/patient/medical-records",
        )
        .await;

        assert_eq!(status, 403);
    }

    #[actix_web::test]
    async fn test_history_repository_error() {
        let (status, body) = get(
            Some(GetMedicalHistoryError::RepositoryError("db".into())),
            StubTokenProvider::admin(Uuid::new_v4()),
            &format!("/api/patients/{}/medical-history", Uuid::new_v4()),
        )
        .await;

        assert_eq!(status, 500);
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    }
}

use crate::admin::application::domain::entities::PatientDetail;
use crate::admin::application::ports::incoming::use_cases::PatientDetailError;
use crate::api::schemas::{ErrorResponse, MessageResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::auth::application::domain::entities::{Role, UserId, UserProfile};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{delete, get, web, Responder};
use tracing::error;
use uuid::Uuid;

use super::users::{delete_response, list_response};

/// Every patient
#[utoipa::path(
    get,
    path = "/api/admin/patients",
    tag = "admin",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Patients ordered by name", body = inline(SuccessResponse<Vec<UserProfile>>)),
    )
)]
#[get("/api/admin/patients")]
pub async fn list_patients_handler(_admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    list_response(data.admin.list_users.execute(Some(Role::Patient)).await)
}

/// One patient with appointment and record counts
#[utoipa::path(
    get,
    path = "/api/admin/patients/{id}",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Patient ID")),
    responses(
        (status = 200, description = "Patient detail", body = inline(SuccessResponse<PatientDetail>)),
        (status = 404, description = "PATIENT_NOT_FOUND", body = ErrorResponse),
    )
)]
#[get("/api/admin/patients/{id}")]
pub async fn patient_detail_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let patient_id = UserId::from(path.into_inner());

    match data.admin.patient_detail.execute(patient_id).await {
        Ok(detail) => ApiResponse::success(detail),

        Err(PatientDetailError::NotFound) => {
            ApiResponse::not_found("PATIENT_NOT_FOUND", "Patient not found")
        }

        Err(PatientDetailError::RepositoryError(ref e)) => {
            error!(%patient_id, error = %e, "Failed to load patient detail");
            ApiResponse::internal_error()
        }
    }
}

/// Delete a patient with their appointments, records and bills
#[utoipa::path(
    delete,
    path = "/api/admin/patients/{id}",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Patient ID")),
    responses(
        (status = 200, description = "Deleted", body = inline(SuccessResponse<MessageResponse>)),
        (status = 404, description = "PATIENT_NOT_FOUND", body = ErrorResponse),
    )
)]
#[delete("/api/admin/patients/{id}")]
pub async fn delete_patient_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let patient_id = UserId::from(path.into_inner());
    let result = data
        .admin
        .delete_user
        .execute(patient_id, Some(Role::Patient))
        .await;

    delete_response(
        result,
        patient_id,
        ("PATIENT_NOT_FOUND", "Patient not found"),
        "Patient deleted successfully",
    )
}

#[cfg(test)]
mod tests {
    use super::super::users::test_mocks::{profile, MockDeleteUser, MockListUsers};
    use super::*;
    use crate::admin::application::ports::incoming::use_cases::{
        DeleteUserError, PatientDetailUseCase,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, token_data, StubTokenProvider};
    use actix_web::{test, App};
    use async_trait::async_trait;

    struct MockDetail(Option<PatientDetailError>);

    #[async_trait]
    impl PatientDetailUseCase for MockDetail {
        async fn execute(&self, patient_id: UserId) -> Result<PatientDetail, PatientDetailError> {
            if let Some(e) = &self.0 {
                return Err(e.clone());
            }
            let mut patient = profile("amy", Role::Patient);
            patient.id = patient_id.value();
            Ok(PatientDetail {
                profile: patient,
                appointment_count: 4,
                medical_record_count: 2,
            })
        }
    }

    fn admin() -> StubTokenProvider {
        StubTokenProvider::admin(Uuid::new_v4())
    }

    #[actix_web::test]
    async fn test_list_patients_filters_by_role() {
        let mock = MockListUsers::default();
        let seen = mock.seen.clone();
        let app_state = TestAppStateBuilder::default().with_list_users(mock).build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_data(admin()))
                .service(list_patients_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/admin/patients")
            .insert_header(bearer())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"][0]["role"], "patient");
        assert_eq!(seen.lock().unwrap().as_slice(), &[Some(Role::Patient)]);
    }

    #[actix_web::test]
    async fn test_patient_detail() {
        let cases = vec![
            (None, 200, None),
            (Some(PatientDetailError::NotFound), 404, Some("PATIENT_NOT_FOUND")),
            (
                Some(PatientDetailError::RepositoryError("db".into())),
                500,
                Some("INTERNAL_ERROR"),
            ),
        ];

        for (error, expected, code) in cases {
            let app_state = TestAppStateBuilder::default()
                .with_patient_detail(MockDetail(error))
                .build();
            let app = test::init_service(
                App::new()
                    .app_data(app_state)
                    .app_data(token_data(admin()))
                    .service(patient_detail_handler),
            )
            .await;

            let patient_id = Uuid::new_v4();
            let req = test::TestRequest::get()
                .uri(&format!("/api/admin/patients/{}", patient_id))
                .insert_header(bearer())
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status().as_u16(), expected);

            let body: serde_json::Value = test::read_body_json(resp).await;
            match code {
                Some(code) => assert_eq!(body["error"]["code"], code),
                None => {
                    assert_eq!(body["data"]["id"], patient_id.to_string());
                    assert_eq!(body["data"]["appointment_count"], 4);
                    assert_eq!(body["data"]["medical_record_count"], 2);
                }
            }
        }
    }

    #[actix_web::test]
    async fn test_delete_patient() {
        let mock = MockDeleteUser {
            error: Some(DeleteUserError::NotFound),
            ..Default::default()
        };
        let seen = mock.seen.clone();
        let app_state = TestAppStateBuilder::default().with_delete_user(mock).build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_data(admin()))
                .service(delete_patient_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/admin/patients/{}", Uuid::new_v4()))
            .insert_header(bearer())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "PATIENT_NOT_FOUND");
        assert_eq!(seen.lock().unwrap()[0].1, Some(Role::Patient));
    }
}

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::{AuthenticatedUser, PatientUser};
use crate::auth::application::domain::entities::UserId;
use crate::billing::application::domain::entities::{Bill, BillView};
use crate::billing::application::ports::incoming::use_cases::{
    ListPatientBillsError, PayBillError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, post, web, Responder};
use tracing::error;
use uuid::Uuid;

/// A patient's bills
///
/// Pending bills past their due date are flagged overdue before listing.
#[utoipa::path(
    get,
    path = "/api/patients/{id}/bills",
    tag = "billing",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Patient ID")),
    responses(
        (status = 200, description = "Bills with appointment date and doctor", body = inline(SuccessResponse<Vec<BillView>>)),
        (status = 403, description = "ACCESS_DENIED", body = ErrorResponse),
    )
)]
#[get("/api/patients/{id}/bills")]
pub async fn patient_bills_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let patient_id = UserId::from(path.into_inner());

    match data
        .billing
        .list_for_patient
        .execute(user.actor(), patient_id)
        .await
    {
        Ok(bills) => ApiResponse::success(bills),

        Err(ListPatientBillsError::Forbidden) => {
            ApiResponse::forbidden("ACCESS_DENIED", "Not authorized to view these bills")
        }

        Err(ListPatientBillsError::RepositoryError(ref e)) => {
            error!(%patient_id, error = %e, "Failed to list bills");
            ApiResponse::internal_error()
        }
    }
}

/// Pay one of the caller's bills
#[utoipa::path(
    post,
    path = "/api/patients/bills/{id}/pay",
    tag = "billing",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Bill ID")),
    responses(
        (status = 200, description = "Bill paid", body = inline(SuccessResponse<Bill>)),
        (status = 400, description = "ALREADY_PAID", body = ErrorResponse),
        (status = 403, description = "NOT_BILL_OWNER", body = ErrorResponse),
        (status = 404, description = "BILL_NOT_FOUND", body = ErrorResponse),
    )
)]
#[post("/api/patients/bills/{id}/pay")]
pub async fn pay_bill_handler(
    patient: PatientUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let bill_id = path.into_inner();

    match data.billing.pay.execute(patient.user_id, bill_id).await {
        Ok(bill) => ApiResponse::success(bill),

        Err(PayBillError::NotFound) => ApiResponse::not_found("BILL_NOT_FOUND", "Bill not found"),

        Err(PayBillError::NotOwner) => {
            ApiResponse::forbidden("NOT_BILL_OWNER", "Not authorized to pay this bill")
        }

        Err(PayBillError::AlreadyPaid) => {
            ApiResponse::bad_request("ALREADY_PAID", "This bill has already been paid")
        }

        Err(PayBillError::RepositoryError(ref e)) => {
            error!(%bill_id, error = %e, "Failed to pay bill");
            ApiResponse::internal_error()
        }
    }
}

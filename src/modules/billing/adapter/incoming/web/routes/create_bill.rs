use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::billing::application::domain::entities::Bill;
use crate::billing::application::ports::incoming::use_cases::{CreateBillCommand, CreateBillError};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBillRequest {
    pub appointment_id: Uuid,
    #[schema(example = "General consultation")]
    pub description: String,
    #[schema(example = 15000)]
    pub amount_cents: i64,
    pub due_date: DateTime<Utc>,
}

/// Bill the patient of an appointment
#[utoipa::path(
    post,
    path = "/api/admin/bills",
    tag = "admin",
    security(("bearer_auth" = [])),
    request_body = CreateBillRequest,
    responses(
        (status = 201, description = "Bill created", body = inline(SuccessResponse<Bill>)),
        (status = 400, description = "VALIDATION_ERROR", body = ErrorResponse),
        (status = 404, description = "APPOINTMENT_NOT_FOUND", body = ErrorResponse),
    )
)]
#[post("/api/admin/bills")]
pub async fn create_bill_handler(
    admin: AdminUser,
    req: web::Json<CreateBillRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let command = match CreateBillCommand::new(
        req.appointment_id,
        req.description,
        req.amount_cents,
        req.due_date,
    ) {
        Ok(c) => c,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.billing.create.execute(command).await {
        Ok(bill) => ApiResponse::created(bill),

        Err(CreateBillError::AppointmentNotFound) => {
            ApiResponse::not_found("APPOINTMENT_NOT_FOUND", "Appointment not found")
        }

        Err(CreateBillError::RepositoryError(ref e)) => {
            error!(admin_id = %admin.user_id, error = %e, "Failed to create bill");
            ApiResponse::internal_error()
        }
    }
}

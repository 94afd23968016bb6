use crate::admin::application::domain::entities::HospitalStats;
use crate::admin::application::ports::incoming::use_cases::HospitalStatsError;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::error;

/// Patient, doctor and appointment totals
#[utoipa::path(
    get,
    path = "/api/admin/stats",
    tag = "admin",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Totals", body = inline(SuccessResponse<HospitalStats>)),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse),
    )
)]
#[get("/api/admin/stats")]
pub async fn stats_handler(_admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.admin.stats.execute().await {
        Ok(stats) => ApiResponse::success(stats),

        Err(HospitalStatsError::RepositoryError(ref e)) => {
            error!(error = %e, "Failed to compute hospital stats");
            ApiResponse::internal_error()
        }
    }
}

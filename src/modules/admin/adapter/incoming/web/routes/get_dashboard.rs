use actix_web::{get, web, Responder};

use crate::api::schemas::SuccessResponse;
use crate::modules::admin::domain::DashboardStats;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Dashboard counts
///
/// Row counts per content table. A table that cannot be read counts as 0.
#[utoipa::path(
    get,
    path = "/api/admin/dashboard",
    tag = "admin",
    responses(
        (status = 200, description = "Content counts", body = inline(SuccessResponse<DashboardStats>))
    )
)]
#[get("/api/admin/dashboard")]
pub async fn get_admin_dashboard_handler(data: web::Data<AppState>) -> impl Responder {
    let stats = data.admin.dashboard.execute().await;
    ApiResponse::success(stats)
}

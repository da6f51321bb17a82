use actix_web::{get, Responder};

use crate::api::schemas::SuccessResponse;
use crate::modules::admin::domain::navigation::sidebar_links;
use crate::modules::admin::domain::SidebarLink;
use crate::shared::api::ApiResponse;

/// Admin sidebar
///
/// Admin pages are not guarded; anyone may fetch the sidebar.
#[utoipa::path(
    get,
    path = "/api/admin/navigation",
    tag = "admin",
    responses(
        (status = 200, description = "Sidebar links in display order", body = inline(SuccessResponse<Vec<SidebarLink>>))
    )
)]
#[get("/api/admin/navigation")]
pub async fn get_admin_navigation_handler() -> impl Responder {
    ApiResponse::success(sidebar_links())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_get_admin_navigation() {
        let app = test::init_service(App::new().service(get_admin_navigation_handler)).await;

        let req = test::TestRequest::get()
            .uri("/api/admin/navigation")
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"].as_array().unwrap().len(), 10);
        assert_eq!(body["data"][9]["label"], "Media");
        assert_eq!(body["data"][9]["path"], "/admin/media");
    }
}

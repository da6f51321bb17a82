use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::admin::application::ports::incoming::use_cases::{
    AdminLoginError, AdminLoginOutcome,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AdminLoginRequest {
    #[schema(example = "admin@example.com")]
    #[serde(default)]
    pub email: String,
    #[schema(example = "change-me")]
    #[serde(default)]
    pub password: String,
}

/// Admin login
///
/// Checks the configured admin credentials. No session or token is issued.
#[utoipa::path(
    post,
    path = "/api/admin/login",
    tag = "admin",
    request_body = AdminLoginRequest,
    responses(
        (
            status = 200,
            description = "Credentials accepted",
            body = inline(SuccessResponse<AdminLoginOutcome>),
            example = json!({
                "success": true,
                "data": { "authenticated": true, "redirect_to": "/admin/dashboard" }
            })
        ),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "INVALID_CREDENTIALS", "message": "Invalid credentials" }
            })
        )
    )
)]
#[post("/api/admin/login")]
pub async fn admin_login_handler(
    data: web::Data<AppState>,
    payload: web::Json<AdminLoginRequest>,
) -> impl Responder {
    match data
        .admin
        .login
        .execute(&payload.email, &payload.password)
        .await
    {
        Ok(outcome) => ApiResponse::success(outcome),
        Err(err) => map_login_error(err),
    }
}

fn map_login_error(err: AdminLoginError) -> HttpResponse {
    match err {
        AdminLoginError::InvalidCredentials => {
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid credentials")
        }
    }
}

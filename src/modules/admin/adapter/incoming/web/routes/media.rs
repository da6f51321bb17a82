use actix_web::{delete, get, post, web, HttpResponse, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::admin::application::ports::incoming::use_cases::{
    ManageMediaError, MediaUpload,
};
use crate::modules::admin::domain::MediaItem;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, ToSchema)]
pub struct UploadMediaRequest {
    pub files: Vec<MediaUpload>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct DeleteMediaRequest {
    #[schema(example = json!([1, 3]))]
    pub ids: Vec<u64>,
}

//
// ──────────────────────────────────────────────────────────
// Handlers
// ──────────────────────────────────────────────────────────
//

/// List media
#[utoipa::path(
    get,
    path = "/api/admin/media",
    tag = "admin",
    responses(
        (status = 200, description = "Media library", body = inline(SuccessResponse<Vec<MediaItem>>))
    )
)]
#[get("/api/admin/media")]
pub async fn list_media_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.admin.media.list().await)
}

/// Register uploads
///
/// Records file names only; no bytes are stored.
#[utoipa::path(
    post,
    path = "/api/admin/media",
    tag = "admin",
    request_body = UploadMediaRequest,
    responses(
        (status = 201, description = "Items added", body = inline(SuccessResponse<Vec<MediaItem>>)),
        (status = 400, description = "Empty, oversized or badly named selection", body = ErrorResponse)
    )
)]
#[post("/api/admin/media")]
pub async fn upload_media_handler(
    data: web::Data<AppState>,
    payload: web::Json<UploadMediaRequest>,
) -> impl Responder {
    match data.admin.media.upload(payload.into_inner().files).await {
        Ok(added) => ApiResponse::created(added),
        Err(err) => map_media_error(err),
    }
}

/// Delete selection
#[utoipa::path(
    delete,
    path = "/api/admin/media",
    tag = "admin",
    request_body = DeleteMediaRequest,
    responses(
        (status = 200, description = "Remaining items", body = inline(SuccessResponse<Vec<MediaItem>>)),
        (status = 400, description = "Empty selection", body = ErrorResponse)
    )
)]
#[delete("/api/admin/media")]
pub async fn delete_media_handler(
    data: web::Data<AppState>,
    payload: web::Json<DeleteMediaRequest>,
) -> impl Responder {
    match data.admin.media.delete(payload.into_inner().ids).await {
        Ok(remaining) => ApiResponse::success(remaining),
        Err(err) => map_media_error(err),
    }
}

fn map_media_error(err: ManageMediaError) -> HttpResponse {
    match err {
        ManageMediaError::EmptySelection => {
            ApiResponse::bad_request("EMPTY_SELECTION", "No files selected")
        }
        ManageMediaError::MissingFileName => {
            ApiResponse::bad_request("INVALID_FILE_NAME", "File name is required")
        }
        ManageMediaError::TooManyFiles(_) => {
            ApiResponse::bad_request("TOO_MANY_FILES", &err.to_string())
        }
        ManageMediaError::FileNameTooLong(_) => {
            ApiResponse::bad_request("INVALID_FILE_NAME", &err.to_string())
        }
        ManageMediaError::UrlTooLong(_) => {
            ApiResponse::bad_request("INVALID_FILE_URL", &err.to_string())
        }
    }
}

use actix_web::{get, post, web, HttpResponse, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::admin::application::ports::incoming::use_cases::{
    SubmitFormError, SubmittedForm,
};
use crate::modules::admin::domain::forms::{FormInput, FormKind, FormSchema};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Handlers
// ──────────────────────────────────────────────────────────
//

/// Form schema
///
/// Fields, option lists and default values for one admin form.
#[utoipa::path(
    get,
    path = "/api/admin/forms/{entity}",
    tag = "admin",
    params(
        ("entity" = String, Path, description = "profile, projects, experience, skills, education, certifications, volunteering or contacts")
    ),
    responses(
        (status = 200, description = "Form schema", body = inline(SuccessResponse<FormSchema>)),
        (status = 404, description = "Unknown form", body = ErrorResponse)
    )
)]
#[get("/api/admin/forms/{entity}")]
pub async fn get_admin_form_handler(path: web::Path<String>) -> impl Responder {
    match FormKind::from_slug(&path.into_inner()) {
        Some(kind) => ApiResponse::success(kind.schema()),
        None => unknown_form(),
    }
}

/// Submit form
///
/// Body is a JSON object of field values keyed by field name. The input is
/// validated and logged. Nothing is stored; the response echoes the
/// normalized values with `persisted: false`.
#[utoipa::path(
    post,
    path = "/api/admin/forms/{entity}",
    tag = "admin",
    params(
        ("entity" = String, Path, description = "Form name")
    ),
    request_body = Object,
    responses(
        (status = 200, description = "Input accepted", body = inline(SuccessResponse<SubmittedForm>)),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 404, description = "Unknown form", body = ErrorResponse)
    )
)]
#[post("/api/admin/forms/{entity}")]
pub async fn submit_admin_form_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
    payload: web::Json<FormInput>,
) -> impl Responder {
    let kind = match FormKind::from_slug(&path.into_inner()) {
        Some(kind) => kind,
        None => return unknown_form(),
    };

    match data
        .admin
        .submit_form
        .execute(kind, payload.into_inner())
        .await
    {
        Ok(submitted) => ApiResponse::success(submitted),
        Err(err) => map_submit_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn unknown_form() -> HttpResponse {
    ApiResponse::not_found("FORM_NOT_FOUND", "No such admin form")
}

fn map_submit_error(err: SubmitFormError) -> HttpResponse {
    match err {
        SubmitFormError::Invalid(fields) => {
            ApiResponse::validation_failed("Please check the highlighted fields", &fields)
        }
    }
}

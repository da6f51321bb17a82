use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::contact::application::ports::incoming::use_cases::SendContactMessageError;
use crate::modules::contact::domain::NewContactMessage;
use crate::shared::api::ApiResponse;
use crate::AppState;

pub const SENT_TITLE: &str = "Message Sent!";
pub const SENT_DESCRIPTION: &str = "Thank you for reaching out. I'll get back to you soon.";
pub const SEND_FAILED_MESSAGE: &str = "Failed to send message. Please try again.";

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, ToSchema)]
pub struct ContactMessageRequest {
    #[schema(example = "Jane Doe")]
    #[serde(default)]
    pub name: String,
    #[schema(example = "jane@example.com")]
    #[serde(default)]
    pub email: String,
    #[schema(example = "Collaboration")]
    pub subject: Option<String>,
    #[schema(example = "I'd love to work with you on an ML project.")]
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ContactMessageSent {
    #[schema(example = "Message Sent!")]
    pub title: String,
    #[schema(example = "Thank you for reaching out. I'll get back to you soon.")]
    pub description: String,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Contact form submission
///
/// Appends one row to `contact_messages`. The row is not read back, so the
/// response carries only the confirmation text.
#[utoipa::path(
    post,
    path = "/api/public/contact-messages",
    tag = "public",
    request_body = ContactMessageRequest,
    responses(
        (status = 201, description = "Message stored", body = inline(SuccessResponse<ContactMessageSent>)),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 502, description = "Backend insert failed", body = ErrorResponse)
    )
)]
#[post("/api/public/contact-messages")]
pub async fn send_contact_message_handler(
    data: web::Data<AppState>,
    payload: web::Json<ContactMessageRequest>,
) -> impl Responder {
    let payload = payload.into_inner();

    // 1️⃣ Validate
    let message = match NewContactMessage::new(
        &payload.name,
        &payload.email,
        payload.subject.as_deref(),
        &payload.message,
    ) {
        Ok(message) => message,
        Err(fields) => {
            return ApiResponse::validation_failed("Please check the highlighted fields", &fields)
        }
    };

    // 2️⃣ Insert
    match data.send_contact_message.execute(message).await {
        Ok(()) => ApiResponse::created(ContactMessageSent {
            title: SENT_TITLE.to_string(),
            description: SENT_DESCRIPTION.to_string(),
        }),
        Err(err) => map_send_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_send_error(err: SendContactMessageError) -> HttpResponse {
    match err {
        // Already logged by the service; the visitor only sees a generic notice
        SendContactMessageError::StoreFailed(_) => {
            ApiResponse::bad_gateway("SEND_FAILED", SEND_FAILED_MESSAGE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::{json, Value};

    use crate::modules::contact::application::ports::incoming::use_cases::SendContactMessageUseCase;
    use crate::shared::api::custom_json_config;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    /* --------------------------------------------------
     * Mock SendContactMessageUseCase
     * -------------------------------------------------- */

    #[derive(Clone)]
    struct MockSendContactMessageUseCase {
        fail: bool,
    }

    impl MockSendContactMessageUseCase {
        fn success() -> Self {
            Self { fail: false }
        }

        fn error() -> Self {
            Self { fail: true }
        }
    }

    #[async_trait]
    impl SendContactMessageUseCase for MockSendContactMessageUseCase {
        async fn execute(
            &self,
            _message: NewContactMessage,
        ) -> Result<(), SendContactMessageError> {
            if self.fail {
                return Err(SendContactMessageError::StoreFailed("timeout".to_string()));
            }
            Ok(())
        }
    }

    async fn call(use_case: MockSendContactMessageUseCase, body: Value) -> (StatusCode, Value) {
        let app_state = TestAppStateBuilder::default()
            .with_send_contact_message(use_case)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(custom_json_config())
                .service(send_contact_message_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/public/contact-messages")
            .set_json(body)
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }

    /* --------------------------------------------------
     * Tests
     * -------------------------------------------------- */

    #[actix_web::test]
    async fn test_send_contact_message_created() {
        let (status, body) = call(
            MockSendContactMessageUseCase::success(),
            json!({
                "name": "Jane",
                "email": "jane@example.com",
                "subject": "",
                "message": "Hello!"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["title"], SENT_TITLE);
        assert_eq!(body["data"]["description"], SENT_DESCRIPTION);
        assert!(body["data"].get("id").is_none());
    }

    #[actix_web::test]
    async fn test_send_contact_message_validation_error() {
        let (status, body) = call(
            MockSendContactMessageUseCase::success(),
            json!({ "name": "Jane", "email": "nope", "message": "  " }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["fields"]["email"], "Invalid email");
        assert_eq!(body["error"]["fields"]["message"], "Message is required");
        assert!(body["error"]["fields"]["name"].is_null());
    }

    #[actix_web::test]
    async fn test_send_contact_message_missing_fields_use_required_messages() {
        let (status, body) = call(MockSendContactMessageUseCase::success(), json!({})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["fields"]["name"], "Name is required");
    }

    #[actix_web::test]
    async fn test_send_contact_message_backend_failure() {
        let (status, body) = call(
            MockSendContactMessageUseCase::error(),
            json!({
                "name": "Jane",
                "email": "jane@example.com",
                "message": "Hello!"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "SEND_FAILED");
        assert_eq!(body["error"]["message"], SEND_FAILED_MESSAGE);
    }
}

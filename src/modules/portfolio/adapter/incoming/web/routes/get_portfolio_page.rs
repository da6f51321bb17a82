use actix_web::{get, web, Responder};
use chrono::Utc;

use crate::api::schemas::SuccessResponse;
use crate::modules::portfolio::domain::sections::PortfolioPage;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Public page
///
/// Every section of the public page in one response. Sections whose read
/// failed come back empty, so this never errors.
#[utoipa::path(
    get,
    path = "/api/public/portfolio",
    tag = "public",
    responses(
        (
            status = 200,
            description = "Rendered page sections",
            body = inline(SuccessResponse<PortfolioPage>)
        )
    )
)]
#[get("/api/public/portfolio")]
pub async fn get_portfolio_page_handler(data: web::Data<AppState>) -> impl Responder {
    let today = Utc::now().date_naive();
    let page = data.get_portfolio_page.execute(today).await;

    ApiResponse::success(page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use serde_json::Value;
    use std::sync::{Arc, Mutex};

    use crate::modules::portfolio::application::ports::incoming::use_cases::GetPortfolioPageUseCase;
    use crate::modules::portfolio::domain::sections::{render_page, PortfolioSnapshot};
    use crate::modules::portfolio::domain::SiteConfig;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    /* --------------------------------------------------
     * Mock GetPortfolioPageUseCase
     * -------------------------------------------------- */

    #[derive(Clone, Default)]
    struct MockGetPortfolioPageUseCase {
        seen_dates: Arc<Mutex<Vec<NaiveDate>>>,
    }

    #[async_trait]
    impl GetPortfolioPageUseCase for MockGetPortfolioPageUseCase {
        async fn execute(&self, today: NaiveDate) -> PortfolioPage {
            self.seen_dates.lock().unwrap().push(today);
            render_page(&PortfolioSnapshot::default(), &SiteConfig::default(), today)
        }
    }

    /* --------------------------------------------------
     * Tests
     * -------------------------------------------------- */

    #[actix_web::test]
    async fn test_get_portfolio_page_success() {
        let use_case = MockGetPortfolioPageUseCase::default();
        let seen = use_case.seen_dates.clone();

        let app_state = TestAppStateBuilder::default()
            .with_get_portfolio_page(use_case)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_portfolio_page_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/public/portfolio")
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;

        // Envelope
        assert_eq!(body["success"], true);
        assert!(body["error"].is_null());

        // Shape checks
        assert_eq!(body["data"]["navbar"]["brand"], "Aryan");
        assert!(body["data"]["navbar"]["links"].is_array());
        assert_eq!(body["data"]["hero"]["name"], "Aryan");
        assert!(body["data"]["projects"].is_array());
        assert!(body["data"]["skills"]["groups"].is_array());
        assert!(body["data"]["certifications"].is_null());
        assert!(body["data"]["volunteering"].is_null());
        assert!(body["data"]["footer"]["year"].is_number());

        // Handler passes the current date through
        assert_eq!(seen.lock().unwrap().len(), 1);
    }
}

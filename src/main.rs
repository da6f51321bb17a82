pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

use crate::modules::admin::adapter::outgoing::InMemoryMediaStore;
use crate::modules::admin::application::service::{
    AdminLoginService, GetDashboardService, ManageMediaService, SubmitFormService,
};
use crate::modules::admin::application::AdminUseCases;
use crate::modules::admin::domain::AdminCredentials;
use crate::modules::contact::adapter::outgoing::ContactMessageRepositoryPostgrest;
use crate::modules::contact::application::ports::incoming::use_cases::SendContactMessageUseCase;
use crate::modules::contact::application::service::SendContactMessageService;
use crate::modules::portfolio::adapter::outgoing::PortfolioQueryPostgrest;
use crate::modules::portfolio::application::ports::incoming::use_cases::GetPortfolioPageUseCase;
use crate::modules::portfolio::application::service::GetPortfolioPageService;
use crate::modules::portfolio::domain::SiteConfig;
use crate::shared::backend::{BackendConfig, RestClient, RestTransport};

use actix_web::{web, App, HttpServer};
use std::env;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub get_portfolio_page: Arc<dyn GetPortfolioPageUseCase + Send + Sync>,
    pub send_contact_message: Arc<dyn SendContactMessageUseCase + Send + Sync>,
    pub admin: AdminUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environtment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");

    let server_url = format!("{host}:{port}");
    info!(%server_url, "Server run on");

    // Hosted backend
    let backend_config = BackendConfig::from_env();
    let rest_client = RestClient::new(backend_config).map_err(std::io::Error::other)?;
    let transport: Arc<dyn RestTransport> = Arc::new(rest_client);

    // Public site
    let portfolio_query = PortfolioQueryPostgrest::new(Arc::clone(&transport));
    let get_portfolio_page =
        GetPortfolioPageService::new(portfolio_query.clone(), SiteConfig::from_env());

    let contact_repo = ContactMessageRepositoryPostgrest::new(Arc::clone(&transport));
    let send_contact_message = SendContactMessageService::new(contact_repo);

    // Admin shell
    let admin = AdminUseCases {
        login: Arc::new(AdminLoginService::new(AdminCredentials::from_env())),
        dashboard: Arc::new(GetDashboardService::new(portfolio_query)),
        submit_form: Arc::new(SubmitFormService::new()),
        media: Arc::new(ManageMediaService::new(InMemoryMediaStore::seeded())),
    };

    let state = AppState {
        get_portfolio_page: Arc::new(get_portfolio_page),
        send_contact_message: Arc::new(send_contact_message),
        admin,
    };

    let openapi = crate::api::openapi::ApiDoc::openapi();

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&transport)))
            .app_data(crate::shared::api::custom_json_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Public site
    cfg.service(crate::modules::portfolio::adapter::incoming::web::routes::get_portfolio_page_handler);
    cfg.service(crate::modules::contact::adapter::incoming::web::routes::send_contact_message_handler);
    // Admin shell
    cfg.service(crate::modules::admin::adapter::incoming::web::routes::admin_login_handler);
    cfg.service(crate::modules::admin::adapter::incoming::web::routes::get_admin_navigation_handler);
    cfg.service(crate::modules::admin::adapter::incoming::web::routes::get_admin_dashboard_handler);
    cfg.service(crate::modules::admin::adapter::incoming::web::routes::get_admin_form_handler);
    cfg.service(crate::modules::admin::adapter::incoming::web::routes::submit_admin_form_handler);
    cfg.service(crate::modules::admin::adapter::incoming::web::routes::list_media_handler);
    cfg.service(crate::modules::admin::adapter::incoming::web::routes::upload_media_handler);
    cfg.service(crate::modules::admin::adapter::incoming::web::routes::delete_media_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}

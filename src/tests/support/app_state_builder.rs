use actix_web::web;
use std::sync::Arc;

use crate::modules::admin::adapter::outgoing::InMemoryMediaStore;
use crate::modules::admin::application::ports::incoming::use_cases::{
    AdminLoginUseCase, GetDashboardUseCase, ManageMediaUseCase, SubmitFormUseCase,
};
use crate::modules::admin::application::service::{ManageMediaService, SubmitFormService};
use crate::modules::admin::application::AdminUseCases;
use crate::modules::contact::application::ports::incoming::use_cases::SendContactMessageUseCase;
use crate::modules::portfolio::application::ports::incoming::use_cases::GetPortfolioPageUseCase;
use crate::tests::support::stubs::*;
use crate::AppState;

pub struct TestAppStateBuilder {
    get_portfolio_page: Arc<dyn GetPortfolioPageUseCase + Send + Sync>,
    send_contact_message: Arc<dyn SendContactMessageUseCase + Send + Sync>,
    admin_login: Arc<dyn AdminLoginUseCase + Send + Sync>,
    dashboard: Arc<dyn GetDashboardUseCase + Send + Sync>,
    submit_form: Arc<dyn SubmitFormUseCase + Send + Sync>,
    media: Arc<dyn ManageMediaUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    /// Stubs for anything that would reach the backend. Form submission and
    /// the media library are pure, so the real services are wired in.
    fn default() -> Self {
        Self {
            get_portfolio_page: Arc::new(StubGetPortfolioPageUseCase),
            send_contact_message: Arc::new(StubSendContactMessageUseCase),
            admin_login: Arc::new(StubAdminLoginUseCase),
            dashboard: Arc::new(StubGetDashboardUseCase),
            submit_form: Arc::new(SubmitFormService::new()),
            media: Arc::new(ManageMediaService::new(InMemoryMediaStore::seeded())),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_get_portfolio_page(
        mut self,
        uc: impl GetPortfolioPageUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_portfolio_page = Arc::new(uc);
        self
    }

    pub fn with_send_contact_message(
        mut self,
        uc: impl SendContactMessageUseCase + Send + Sync + 'static,
    ) -> Self {
        self.send_contact_message = Arc::new(uc);
        self
    }

    pub fn with_admin_login(mut self, uc: impl AdminLoginUseCase + Send + Sync + 'static) -> Self {
        self.admin_login = Arc::new(uc);
        self
    }

    pub fn with_dashboard(mut self, uc: impl GetDashboardUseCase + Send + Sync + 'static) -> Self {
        self.dashboard = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            get_portfolio_page: self.get_portfolio_page,
            send_contact_message: self.send_contact_message,
            admin: AdminUseCases {
                login: self.admin_login,
                dashboard: self.dashboard,
                submit_form: self.submit_form,
                media: self.media,
            },
        })
    }
}

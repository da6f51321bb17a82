use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::Value;

use crate::modules::admin::application::ports::incoming::use_cases::{
    AdminLoginError, AdminLoginOutcome, AdminLoginUseCase, GetDashboardUseCase,
};
use crate::modules::admin::domain::DashboardStats;
use crate::modules::contact::application::ports::incoming::use_cases::{
    SendContactMessageError, SendContactMessageUseCase,
};
use crate::modules::contact::domain::NewContactMessage;
use crate::modules::portfolio::application::ports::incoming::use_cases::GetPortfolioPageUseCase;
use crate::modules::portfolio::domain::sections::{render_page, PortfolioPage, PortfolioSnapshot};
use crate::modules::portfolio::domain::SiteConfig;
use crate::shared::backend::{BackendError, RestTransport, SelectQuery};

/* --------------------------------------------------
 * Portfolio
 * -------------------------------------------------- */

/// Renders a page with every slot empty.
#[derive(Clone)]
pub struct StubGetPortfolioPageUseCase;

#[async_trait]
impl GetPortfolioPageUseCase for StubGetPortfolioPageUseCase {
    async fn execute(&self, today: NaiveDate) -> PortfolioPage {
        render_page(&PortfolioSnapshot::default(), &SiteConfig::default(), today)
    }
}

/* --------------------------------------------------
 * Contact
 * -------------------------------------------------- */

#[derive(Clone)]
pub struct StubSendContactMessageUseCase;

#[async_trait]
impl SendContactMessageUseCase for StubSendContactMessageUseCase {
    async fn execute(&self, _message: NewContactMessage) -> Result<(), SendContactMessageError> {
        Err(SendContactMessageError::StoreFailed(
            "not used in this test".to_string(),
        ))
    }
}

/* --------------------------------------------------
 * Admin
 * -------------------------------------------------- */

#[derive(Clone)]
pub struct StubAdminLoginUseCase;

#[async_trait]
impl AdminLoginUseCase for StubAdminLoginUseCase {
    async fn execute(
        &self,
        _email: &str,
        _password: &str,
    ) -> Result<AdminLoginOutcome, AdminLoginError> {
        Err(AdminLoginError::InvalidCredentials)
    }
}

#[derive(Clone)]
pub struct StubGetDashboardUseCase;

#[async_trait]
impl GetDashboardUseCase for StubGetDashboardUseCase {
    async fn execute(&self) -> DashboardStats {
        DashboardStats::default()
    }
}

/* --------------------------------------------------
 * Backend
 * -------------------------------------------------- */

/// Only `ping` is meaningful; table calls report the backend as unreachable.
#[derive(Clone)]
pub struct StubRestTransport {
    reachable: bool,
}

impl StubRestTransport {
    pub fn reachable() -> Self {
        Self { reachable: true }
    }

    pub fn unreachable() -> Self {
        Self { reachable: false }
    }

    fn down() -> BackendError {
        BackendError::Transport("connection refused".to_string())
    }
}

#[async_trait]
impl RestTransport for StubRestTransport {
    async fn select(&self, _table: &str, _query: &SelectQuery) -> Result<Value, BackendError> {
        Err(Self::down())
    }

    async fn insert(&self, _table: &str, _row: Value) -> Result<(), BackendError> {
        Err(Self::down())
    }

    async fn ping(&self) -> Result<(), BackendError> {
        if self.reachable {
            Ok(())
        } else {
            Err(Self::down())
        }
    }
}

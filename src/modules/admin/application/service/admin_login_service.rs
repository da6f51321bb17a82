use async_trait::async_trait;
use tracing::{info, warn};

use crate::modules::admin::application::ports::incoming::use_cases::{
    AdminLoginError, AdminLoginOutcome, AdminLoginUseCase,
};
use crate::modules::admin::domain::navigation::ADMIN_HOME;
use crate::modules::admin::domain::AdminCredentials;

pub struct AdminLoginService {
    credentials: AdminCredentials,
}

impl AdminLoginService {
    pub fn new(credentials: AdminCredentials) -> Self {
        Self { credentials }
    }
}

#[async_trait]
impl AdminLoginUseCase for AdminLoginService {
    async fn execute(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AdminLoginOutcome, AdminLoginError> {
        if !self.credentials.matches(email, password) {
            warn!("Admin login rejected");
            return Err(AdminLoginError::InvalidCredentials);
        }

        info!("Admin login accepted");
        Ok(AdminLoginOutcome {
            authenticated: true,
            redirect_to: ADMIN_HOME.to_string(),
        })
    }
}

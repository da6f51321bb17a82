use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdminLoginError {
    #[error("Invalid credentials")]
    InvalidCredentials,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct AdminLoginOutcome {
    pub authenticated: bool,
    #[schema(example = "/admin/dashboard")]
    pub redirect_to: String,
}

/// Fixed credential check. Issues nothing; the caller only learns where to go.
#[async_trait]
pub trait AdminLoginUseCase: Send + Sync {
    async fn execute(&self, email: &str, password: &str)
        -> Result<AdminLoginOutcome, AdminLoginError>;
}

// src/modules/portfolio/application/ports/outgoing/portfolio_query.rs

use async_trait::async_trait;

use crate::modules::portfolio::domain::{
    Certification, Contact, Education, Experience, Profile, Project, Skill, Volunteering,
};
use crate::shared::backend::BackendError;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PortfolioQueryError {
    #[error("Backend unavailable: {0}")]
    Unavailable(String),

    #[error("Backend rejected query: {0}")]
    Rejected(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<BackendError> for PortfolioQueryError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::Transport(msg) => PortfolioQueryError::Unavailable(msg),
            BackendError::Status { status, body } => {
                PortfolioQueryError::Rejected(format!("{}: {}", status, body))
            }
            BackendError::Decode(msg) => PortfolioQueryError::SerializationError(msg),
            BackendError::NotFound => PortfolioQueryError::Rejected("Not found".to_string()),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Port (read-side, one call per table)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait PortfolioQuery: Send + Sync {
    /// The single profile row; `None` when the table is empty.
    async fn get_profile(&self) -> Result<Option<Profile>, PortfolioQueryError>;

    async fn list_projects(&self) -> Result<Vec<Project>, PortfolioQueryError>;

    async fn list_experiences(&self) -> Result<Vec<Experience>, PortfolioQueryError>;

    async fn list_skills(&self) -> Result<Vec<Skill>, PortfolioQueryError>;

    async fn list_education(&self) -> Result<Vec<Education>, PortfolioQueryError>;

    async fn list_certifications(&self) -> Result<Vec<Certification>, PortfolioQueryError>;

    async fn list_volunteering(&self) -> Result<Vec<Volunteering>, PortfolioQueryError>;

    /// Only rows flagged `is_public`.
    async fn list_public_contacts(&self) -> Result<Vec<Contact>, PortfolioQueryError>;
}

use async_trait::async_trait;

use crate::modules::contact::application::ports::outgoing::ContactMessageRepositoryError;
use crate::modules::contact::domain::NewContactMessage;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SendContactMessageError {
    #[error("Failed to store message: {0}")]
    StoreFailed(String),
}

impl From<ContactMessageRepositoryError> for SendContactMessageError {
    fn from(err: ContactMessageRepositoryError) -> Self {
        SendContactMessageError::StoreFailed(err.to_string())
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait SendContactMessageUseCase: Send + Sync {
    async fn execute(&self, message: NewContactMessage) -> Result<(), SendContactMessageError>;
}

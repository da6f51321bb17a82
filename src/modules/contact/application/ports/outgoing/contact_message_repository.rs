// src/modules/contact/application/ports/outgoing/contact_message_repository.rs

use async_trait::async_trait;

use crate::modules::contact::domain::NewContactMessage;
use crate::shared::backend::BackendError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ContactMessageRepositoryError {
    #[error("Backend unavailable: {0}")]
    Unavailable(String),

    #[error("Insert rejected: {0}")]
    Rejected(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<BackendError> for ContactMessageRepositoryError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::Transport(msg) => ContactMessageRepositoryError::Unavailable(msg),
            BackendError::Status { status, body } => {
                ContactMessageRepositoryError::Rejected(format!("{}: {}", status, body))
            }
            BackendError::Decode(msg) => ContactMessageRepositoryError::SerializationError(msg),
            BackendError::NotFound => {
                ContactMessageRepositoryError::Rejected("Not found".to_string())
            }
        }
    }
}

/// Append-only; the service never reads messages back.
#[async_trait]
pub trait ContactMessageRepository: Send + Sync {
    async fn insert(
        &self,
        message: &NewContactMessage,
    ) -> Result<(), ContactMessageRepositoryError>;
}

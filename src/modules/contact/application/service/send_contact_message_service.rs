use async_trait::async_trait;
use tracing::{error, info};

use crate::modules::contact::application::ports::incoming::use_cases::{
    SendContactMessageError, SendContactMessageUseCase,
};
use crate::modules::contact::application::ports::outgoing::ContactMessageRepository;
use crate::modules::contact::domain::NewContactMessage;

// ============================================================================
// Service Implementation
// ============================================================================

pub struct SendContactMessageService<R>
where
    R: ContactMessageRepository,
{
    repository: R,
}

impl<R> SendContactMessageService<R>
where
    R: ContactMessageRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> SendContactMessageUseCase for SendContactMessageService<R>
where
    R: ContactMessageRepository + Send + Sync,
{
    /// One insert, no retry.
    async fn execute(&self, message: NewContactMessage) -> Result<(), SendContactMessageError> {
        match self.repository.insert(&message).await {
            Ok(()) => {
                info!(has_subject = message.subject().is_some(), "Contact message stored");
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Failed to store contact message");
                Err(e.into())
            }
        }
    }
}

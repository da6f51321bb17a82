// src/modules/contact/adapter/outgoing/contact_message_repository_postgrest.rs

use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::modules::contact::application::ports::outgoing::{
    ContactMessageRepository, ContactMessageRepositoryError,
};
use crate::modules::contact::domain::NewContactMessage;
use crate::shared::backend::RestTransport;

const TABLE: &str = "contact_messages";

#[derive(Clone)]
pub struct ContactMessageRepositoryPostgrest {
    transport: Arc<dyn RestTransport>,
}

impl ContactMessageRepositoryPostgrest {
    pub fn new(transport: Arc<dyn RestTransport>) -> Self {
        Self { transport }
    }
}

fn to_row(message: &NewContactMessage) -> Value {
    json!({
        "name": message.name(),
        "email": message.email(),
        "subject": message.subject(),
        "message": message.message(),
    })
}

#[async_trait]
impl ContactMessageRepository for ContactMessageRepositoryPostgrest {
    async fn insert(&self, message: &NewContactMessage) -> Result<(), ContactMessageRepositoryError> {
        self.transport.insert(TABLE, to_row(message)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;

    use crate::shared::backend::{BackendError, SelectQuery};

    mock! {
        pub Transport {}
        #[async_trait]
        impl RestTransport for Transport {
            async fn select(&self, table: &str, query: &SelectQuery) -> Result<Value, BackendError>;
            async fn insert(&self, table: &str, row: Value) -> Result<(), BackendError>;
            async fn ping(&self) -> Result<(), BackendError>;
        }
    }

    fn message() -> NewContactMessage {
        NewContactMessage::new("Jane", "jane@example.com", None, "Hello there").unwrap()
    }

    #[tokio::test]
    async fn insert_sends_only_the_form_fields() {
        let mut mock = MockTransport::new();
        mock.expect_insert()
            .withf(|table, row| {
                table == "contact_messages"
                    && row["name"] == "Jane"
                    && row["email"] == "jane@example.com"
                    && row["subject"].is_null()
                    && row["message"] == "Hello there"
                    && row.get("id").is_none()
                    && row.get("is_read").is_none()
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let repo = ContactMessageRepositoryPostgrest::new(Arc::new(mock));

        assert_eq!(repo.insert(&message()).await, Ok(()));
    }

    #[tokio::test]
    async fn insert_never_reads_back() {
        let mut mock = MockTransport::new();
        mock.expect_insert().times(1).returning(|_, _| Ok(()));
        mock.expect_select().never();

        let repo = ContactMessageRepositoryPostgrest::new(Arc::new(mock));

        assert!(repo.insert(&message()).await.is_ok());
    }

    #[tokio::test]
    async fn insert_maps_backend_rejection() {
        let mut mock = MockTransport::new();
        mock.expect_insert().returning(|_, _| {
            Err(BackendError::Status {
                status: 401,
                body: "permission denied".to_string(),
            })
        });

        let repo = ContactMessageRepositoryPostgrest::new(Arc::new(mock));
        let err = repo.insert(&message()).await.unwrap_err();

        assert_eq!(
            err,
            ContactMessageRepositoryError::Rejected("401: permission denied".to_string())
        );
    }

    #[tokio::test]
    async fn insert_maps_transport_failure() {
        let mut mock = MockTransport::new();
        mock.expect_insert()
            .returning(|_, _| Err(BackendError::Transport("timed out".to_string())));

        let repo = ContactMessageRepositoryPostgrest::new(Arc::new(mock));

        assert_eq!(
            repo.insert(&message()).await,
            Err(ContactMessageRepositoryError::Unavailable("timed out".to_string()))
        );
    }
}

// src/modules/portfolio/adapter/outgoing/portfolio_query_postgrest.rs

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::modules::portfolio::application::ports::outgoing::{
    PortfolioQuery, PortfolioQueryError,
};
use crate::modules::portfolio::domain::{
    Certification, Contact, Education, Experience, Profile, Project, Skill, Volunteering,
};
use crate::shared::backend::{decode_rows, BackendError, RestTransport, SelectQuery};

const SORT_COLUMN: &str = "sort_order";

// ============================================================================
// Query Implementation
// ============================================================================

#[derive(Clone)]
pub struct PortfolioQueryPostgrest {
    transport: Arc<dyn RestTransport>,
}

impl PortfolioQueryPostgrest {
    pub fn new(transport: Arc<dyn RestTransport>) -> Self {
        Self { transport }
    }

    async fn list_sorted<T: DeserializeOwned>(
        &self,
        table: &str,
        query: SelectQuery,
    ) -> Result<Vec<T>, PortfolioQueryError> {
        let rows = self
            .transport
            .select(table, &query.order_asc(SORT_COLUMN))
            .await?;
        Ok(decode_rows(rows)?)
    }
}

#[async_trait]
impl PortfolioQuery for PortfolioQueryPostgrest {
    async fn get_profile(&self) -> Result<Option<Profile>, PortfolioQueryError> {
        let query = SelectQuery::all().limit(1).single();

        match self.transport.select("profiles", &query).await {
            Ok(row) => serde_json::from_value(row)
                .map(Some)
                .map_err(|e| PortfolioQueryError::SerializationError(e.to_string())),
            Err(BackendError::NotFound) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn list_projects(&self) -> Result<Vec<Project>, PortfolioQueryError> {
        self.list_sorted("projects", SelectQuery::all()).await
    }

    async fn list_experiences(&self) -> Result<Vec<Experience>, PortfolioQueryError> {
        self.list_sorted("experiences", SelectQuery::all()).await
    }

    async fn list_skills(&self) -> Result<Vec<Skill>, PortfolioQueryError> {
        self.list_sorted("skills", SelectQuery::all()).await
    }

    async fn list_education(&self) -> Result<Vec<Education>, PortfolioQueryError> {
        self.list_sorted("education", SelectQuery::all()).await
    }

    async fn list_certifications(&self) -> Result<Vec<Certification>, PortfolioQueryError> {
        self.list_sorted("certifications", SelectQuery::all()).await
    }

    async fn list_volunteering(&self) -> Result<Vec<Volunteering>, PortfolioQueryError> {
        self.list_sorted("volunteering", SelectQuery::all()).await
    }

    async fn list_public_contacts(&self) -> Result<Vec<Contact>, PortfolioQueryError> {
        self.list_sorted("contacts", SelectQuery::all().eq("is_public", true))
            .await
    }
}

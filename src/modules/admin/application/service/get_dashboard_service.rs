use async_trait::async_trait;
use tracing::warn;

use crate::modules::admin::application::ports::incoming::use_cases::GetDashboardUseCase;
use crate::modules::admin::domain::DashboardStats;
use crate::modules::portfolio::application::ports::outgoing::{
    PortfolioQuery, PortfolioQueryError,
};

// ============================================================================
// Service Implementation
// ============================================================================

pub struct GetDashboardService<Q>
where
    Q: PortfolioQuery,
{
    query: Q,
}

impl<Q> GetDashboardService<Q>
where
    Q: PortfolioQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

fn count<T>(table: &str, result: Result<Vec<T>, PortfolioQueryError>) -> usize {
    match result {
        Ok(rows) => rows.len(),
        Err(e) => {
            warn!(table, error = %e, "Dashboard count failed; showing 0");
            0
        }
    }
}

#[async_trait]
impl<Q> GetDashboardUseCase for GetDashboardService<Q>
where
    Q: PortfolioQuery + Send + Sync,
{
    async fn execute(&self) -> DashboardStats {
        let (projects, experiences, skills, education, certifications, volunteering, contacts) = futures::join!(
            self.query.list_projects(),
            self.query.list_experiences(),
            self.query.list_skills(),
            self.query.list_education(),
            self.query.list_certifications(),
            self.query.list_volunteering(),
            self.query.list_public_contacts(),
        );

        DashboardStats {
            projects: count("projects", projects),
            experiences: count("experiences", experiences),
            skills: count("skills", skills),
            education: count("education", education),
            certifications: count("certifications", certifications),
            volunteering: count("volunteering", volunteering),
            contacts: count("contacts", contacts),
        }
    }
}

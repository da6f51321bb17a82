use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::warn;

use crate::modules::portfolio::application::ports::incoming::use_cases::GetPortfolioPageUseCase;
use crate::modules::portfolio::application::ports::outgoing::{
    PortfolioQuery, PortfolioQueryError,
};
use crate::modules::portfolio::domain::sections::{render_page, PortfolioPage, PortfolioSnapshot};
use crate::modules::portfolio::domain::SiteConfig;

// ============================================================================
// Service Implementation
// ============================================================================

pub struct GetPortfolioPageService<Q>
where
    Q: PortfolioQuery,
{
    query: Q,
    site: SiteConfig,
}

impl<Q> GetPortfolioPageService<Q>
where
    Q: PortfolioQuery,
{
    pub fn new(query: Q, site: SiteConfig) -> Self {
        Self { query, site }
    }

    /// All eight reads are in flight at once; none waits on another.
    async fn load_snapshot(&self) -> PortfolioSnapshot {
        let (profile, projects, experiences, skills, education, certifications, volunteering, contacts) = futures::join!(
            self.query.get_profile(),
            self.query.list_projects(),
            self.query.list_experiences(),
            self.query.list_skills(),
            self.query.list_education(),
            self.query.list_certifications(),
            self.query.list_volunteering(),
            self.query.list_public_contacts(),
        );

        PortfolioSnapshot {
            profile: fill_slot("profiles", profile),
            projects: fill_slot("projects", projects),
            experiences: fill_slot("experiences", experiences),
            skills: fill_slot("skills", skills),
            education: fill_slot("education", education),
            certifications: fill_slot("certifications", certifications),
            volunteering: fill_slot("volunteering", volunteering),
            contacts: fill_slot("contacts", contacts),
        }
    }
}

fn fill_slot<T: Default>(table: &str, result: Result<T, PortfolioQueryError>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            warn!(table, error = %e, "Portfolio read failed; section left empty");
            T::default()
        }
    }
}

#[async_trait]
impl<Q> GetPortfolioPageUseCase for GetPortfolioPageService<Q>
where
    Q: PortfolioQuery + Send + Sync,
{
    async fn execute(&self, today: NaiveDate) -> PortfolioPage {
        let snapshot = self.load_snapshot().await;
        render_page(&snapshot, &self.site, today)
    }
}

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::modules::portfolio::domain::sections::PortfolioPage;

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

/// Infallible: failed reads degrade to empty sections.
#[async_trait]
pub trait GetPortfolioPageUseCase: Send + Sync {
    async fn execute(&self, today: NaiveDate) -> PortfolioPage;
}

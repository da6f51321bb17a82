use async_trait::async_trait;

use crate::modules::admin::domain::DashboardStats;

#[async_trait]
pub trait GetDashboardUseCase: Send + Sync {
    async fn execute(&self) -> DashboardStats;
}

use std::sync::Arc;

use crate::modules::admin::application::ports::incoming::use_cases::{
    AdminLoginUseCase, GetDashboardUseCase, ManageMediaUseCase, SubmitFormUseCase,
};

#[derive(Clone)]
pub struct AdminUseCases {
    pub login: Arc<dyn AdminLoginUseCase + Send + Sync>,
    pub dashboard: Arc<dyn GetDashboardUseCase + Send + Sync>,
    pub submit_form: Arc<dyn SubmitFormUseCase + Send + Sync>,
    pub media: Arc<dyn ManageMediaUseCase + Send + Sync>,
}

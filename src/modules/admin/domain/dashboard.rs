// src/modules/admin/domain/dashboard.rs

use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct DashboardStats {
    pub projects: usize,
    pub experiences: usize,
    pub skills: usize,
    pub education: usize,
    pub certifications: usize,
    pub volunteering: usize,
    pub contacts: usize,
}

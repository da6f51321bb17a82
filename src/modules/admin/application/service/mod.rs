mod admin_login_service;
mod get_dashboard_service;
mod manage_media_service;
mod submit_form_service;

pub use admin_login_service::AdminLoginService;
pub use get_dashboard_service::GetDashboardService;
pub use manage_media_service::ManageMediaService;
pub use submit_form_service::SubmitFormService;

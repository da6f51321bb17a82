mod admin_login;
mod get_dashboard;
mod manage_media;
mod submit_form;

pub use admin_login::{AdminLoginError, AdminLoginOutcome, AdminLoginUseCase};
pub use get_dashboard::GetDashboardUseCase;
pub use manage_media::{ManageMediaError, ManageMediaUseCase, MediaUpload};
pub use submit_form::{SubmitFormError, SubmitFormUseCase, SubmittedForm};

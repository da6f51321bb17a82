use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::OpenApi;

// Public site
use crate::modules::contact::adapter::incoming::web::routes::{
    ContactMessageRequest, ContactMessageSent,
};
use crate::modules::portfolio::domain::sections::{
    CertificationCard, ContactCard, EducationEntry, ExperienceEntry, FooterView, HeroView,
    NavLink, NavbarView, PortfolioPage, ProjectCard, SkillBar, SkillGroup, SkillsView,
    VolunteeringEntry,
};

// Admin shell
use crate::modules::admin::adapter::incoming::web::routes::{
    AdminLoginRequest, DeleteMediaRequest, UploadMediaRequest,
};
use crate::modules::admin::application::ports::incoming::use_cases::{
    AdminLoginOutcome, MediaUpload, SubmittedForm,
};
use crate::modules::admin::domain::forms::fields::{FieldSpec, SelectOption};
use crate::modules::admin::domain::forms::FormSchema;
use crate::modules::admin::domain::{DashboardStats, MediaItem, SidebarLink};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "Public portfolio sections, contact form and the admin shell",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Public endpoints
        crate::modules::portfolio::adapter::incoming::web::routes::get_portfolio_page_handler,
        crate::modules::contact::adapter::incoming::web::routes::send_contact_message_handler,

        // Admin endpoints
        crate::modules::admin::adapter::incoming::web::routes::admin_login_handler,
        crate::modules::admin::adapter::incoming::web::routes::get_admin_navigation_handler,
        crate::modules::admin::adapter::incoming::web::routes::get_admin_dashboard_handler,
        crate::modules::admin::adapter::incoming::web::routes::get_admin_form_handler,
        crate::modules::admin::adapter::incoming::web::routes::submit_admin_form_handler,
        crate::modules::admin::adapter::incoming::web::routes::list_media_handler,
        crate::modules::admin::adapter::incoming::web::routes::upload_media_handler,
        crate::modules::admin::adapter::incoming::web::routes::delete_media_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<PortfolioPage>,
            ErrorResponse,
            ErrorDetail,

            // Portfolio sections
            PortfolioPage,
            NavbarView,
            NavLink,
            HeroView,
            ProjectCard,
            ExperienceEntry,
            SkillsView,
            SkillGroup,
            SkillBar,
            EducationEntry,
            CertificationCard,
            VolunteeringEntry,
            ContactCard,
            FooterView,

            // Contact DTOs
            ContactMessageRequest,
            ContactMessageSent,

            // Admin DTOs
            AdminLoginRequest,
            AdminLoginOutcome,
            SidebarLink,
            DashboardStats,
            FormSchema,
            FieldSpec,
            SelectOption,
            SubmittedForm,
            MediaItem,
            MediaUpload,
            UploadMediaRequest,
            DeleteMediaRequest
        )
    ),
    tags(
        (name = "public", description = "Public portfolio endpoints"),
        (name = "admin", description = "Admin shell endpoints"),
    )
)]
pub struct ApiDoc;

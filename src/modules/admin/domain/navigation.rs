// src/modules/admin/domain/navigation.rs

use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SidebarLink {
    pub label: String,
    pub path: String,
    pub icon: String,
}

const SIDEBAR: [(&str, &str, &str); 10] = [
    ("Dashboard", "/admin/dashboard", "Home"),
    ("Profile", "/admin/profile", "User"),
    ("Projects", "/admin/projects", "Briefcase"),
    ("Experience", "/admin/experience", "Briefcase"),
    ("Skills", "/admin/skills", "Star"),
    ("Education", "/admin/education", "GraduationCap"),
    ("Certifications", "/admin/certifications", "Award"),
    ("Volunteering", "/admin/volunteering", "Heart"),
    ("Contacts", "/admin/contacts", "Mail"),
    ("Media", "/admin/media", "Image"),
];

pub const ADMIN_HOME: &str = "/admin/dashboard";

pub fn sidebar_links() -> Vec<SidebarLink> {
    SIDEBAR
        .iter()
        .map(|(label, path, icon)| SidebarLink {
            label: label.to_string(),
            path: path.to_string(),
            icon: icon.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sidebar_order_and_paths() {
        let links = sidebar_links();
        let labels: Vec<&str> = links.iter().map(|l| l.label.as_str()).collect();

        assert_eq!(
            labels,
            vec![
                "Dashboard",
                "Profile",
                "Projects",
                "Experience",
                "Skills",
                "Education",
                "Certifications",
                "Volunteering",
                "Contacts",
                "Media"
            ]
        );
        assert_eq!(links[0].path, ADMIN_HOME);
        assert!(links.iter().all(|l| l.path.starts_with("/admin/")));
    }
}

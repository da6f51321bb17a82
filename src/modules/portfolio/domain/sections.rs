// src/modules/portfolio/domain/sections.rs
//
// View models for the public page. Every function here is pure: records in,
// display-ready values out.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::entities::{
    Certification, Contact, Education, Experience, Profile, Project, Skill, SkillCategory,
    SkillLevel, Volunteering,
};
use super::formatting::{self, ExpiryStatus};
use super::site::SiteConfig;

const NAV_SECTIONS: [&str; 8] = [
    "Home",
    "Projects",
    "Experience",
    "Skills",
    "Education",
    "Certifications",
    "Volunteering",
    "Contact",
];

const FOOTER_QUICK_LINKS: [&str; 5] = ["Home", "Projects", "Experience", "Skills", "Contact"];

const SOCIAL_CONTACT_TYPE: &str = "social";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    fn anchor(label: &str) -> Self {
        Self {
            label: label.to_string(),
            href: format!("#{}", label.to_lowercase()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct NavbarView {
    pub brand: String,
    pub links: Vec<NavLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct HeroView {
    pub name: String,
    pub title: Option<String>,
    pub roles: Vec<String>,
    pub bio: String,
    pub avatar_url: Option<String>,
    pub location: Option<String>,
    pub actions: Vec<NavLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ProjectCard {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub technologies: Vec<String>,
    pub is_featured: bool,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ExperienceEntry {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub period: String,
    pub is_current: bool,
    pub description: Option<String>,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SkillBar {
    pub id: Uuid,
    pub name: String,
    #[schema(value_type = String)]
    pub level: SkillLevel,
    pub percentage: u8,
    pub icon_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SkillGroup {
    #[schema(value_type = String)]
    pub category: SkillCategory,
    pub display_name: String,
    pub skills: Vec<SkillBar>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SkillsView {
    pub groups: Vec<SkillGroup>,
    /// Flat list of every skill name, in display order.
    pub tech_stack: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct EducationEntry {
    pub id: Uuid,
    pub degree: String,
    pub institution: String,
    pub location: Option<String>,
    pub years: Option<String>,
    pub is_current: bool,
    pub gpa: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CertificationCard {
    pub id: Uuid,
    pub title: String,
    pub issuer: String,
    pub issued: Option<String>,
    pub expires: Option<String>,
    #[schema(value_type = Option<String>)]
    pub status: Option<ExpiryStatus>,
    pub credential_url: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct VolunteeringEntry {
    pub id: Uuid,
    pub title: String,
    pub organization: String,
    pub location: Option<String>,
    pub period: String,
    pub currently_active: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ContactCard {
    pub id: Uuid,
    pub label: String,
    pub value: String,
    #[serde(rename = "type")]
    pub contact_type: String,
    pub icon: String,
    pub is_primary: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct FooterView {
    pub brand: String,
    pub social: Vec<ContactCard>,
    pub quick_links: Vec<NavLink>,
    pub year: i32,
    pub copyright: String,
}

/// Raw reads, one slot per table. A failed read leaves its slot empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PortfolioSnapshot {
    pub profile: Option<Profile>,
    pub projects: Vec<Project>,
    pub experiences: Vec<Experience>,
    pub skills: Vec<Skill>,
    pub education: Vec<Education>,
    pub certifications: Vec<Certification>,
    pub volunteering: Vec<Volunteering>,
    pub contacts: Vec<Contact>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PortfolioPage {
    pub navbar: NavbarView,
    pub hero: HeroView,
    pub projects: Vec<ProjectCard>,
    pub experience: Vec<ExperienceEntry>,
    pub skills: SkillsView,
    pub education: Vec<EducationEntry>,
    /// Absent when there is nothing to show.
    pub certifications: Option<Vec<CertificationCard>>,
    /// Absent when there is nothing to show.
    pub volunteering: Option<Vec<VolunteeringEntry>>,
    pub contact: Vec<ContactCard>,
    pub footer: FooterView,
}

// ============================================================================
// Rendering
// ============================================================================

pub fn render_page(snapshot: &PortfolioSnapshot, site: &SiteConfig, today: NaiveDate) -> PortfolioPage {
    PortfolioPage {
        navbar: render_navbar(site),
        hero: render_hero(snapshot.profile.as_ref(), site),
        projects: render_projects(&snapshot.projects),
        experience: render_experience(&snapshot.experiences),
        skills: render_skills(&snapshot.skills),
        education: render_education(&snapshot.education),
        certifications: render_certifications(&snapshot.certifications, today),
        volunteering: render_volunteering(&snapshot.volunteering),
        contact: render_contacts(&snapshot.contacts),
        footer: render_footer(&snapshot.contacts, site, today),
    }
}

pub fn render_navbar(site: &SiteConfig) -> NavbarView {
    NavbarView {
        brand: site.owner_name.clone(),
        links: NAV_SECTIONS.iter().map(|s| NavLink::anchor(s)).collect(),
    }
}

pub fn render_hero(profile: Option<&Profile>, site: &SiteConfig) -> HeroView {
    let non_blank =
        |value: Option<&str>| formatting::non_blank(value).map(|v| v.trim().to_string());

    HeroView {
        name: non_blank(profile.map(|p| p.name.as_str()))
            .unwrap_or_else(|| site.owner_name.clone()),
        title: non_blank(profile.map(|p| p.title.as_str())),
        roles: site.roles.clone(),
        bio: non_blank(profile.and_then(|p| p.bio.as_deref()))
            .unwrap_or_else(|| site.tagline.clone()),
        avatar_url: non_blank(profile.and_then(|p| p.avatar_url.as_deref())),
        location: non_blank(profile.and_then(|p| p.location.as_deref())),
        actions: vec![
            NavLink {
                label: "View Projects".to_string(),
                href: "#projects".to_string(),
            },
            NavLink {
                label: "Contact Me".to_string(),
                href: "#contact".to_string(),
            },
        ],
    }
}

pub fn render_projects(projects: &[Project]) -> Vec<ProjectCard> {
    projects
        .iter()
        .map(|p| ProjectCard {
            id: p.id,
            title: p.title.clone(),
            description: p.description.clone(),
            technologies: p.technologies.clone().unwrap_or_default(),
            is_featured: p.is_featured.unwrap_or(false),
            github_url: p.github_url.clone(),
            live_url: p.live_url.clone(),
            image_url: p.image_url.clone(),
        })
        .collect()
}

pub fn render_experience(experiences: &[Experience]) -> Vec<ExperienceEntry> {
    experiences
        .iter()
        .map(|e| {
            let is_current = e.is_current.unwrap_or(false);
            ExperienceEntry {
                id: e.id,
                title: e.title.clone(),
                company: e.company.clone(),
                location: e.location.clone(),
                period: formatting::period_label(&e.start_date, e.end_date.as_deref(), is_current),
                is_current,
                description: e.description.clone(),
                technologies: e.technologies.clone().unwrap_or_default(),
            }
        })
        .collect()
}

/// Groups keep the order in which their category first appears.
pub fn render_skills(skills: &[Skill]) -> SkillsView {
    let mut groups: Vec<SkillGroup> = Vec::new();

    for skill in skills {
        let bar = SkillBar {
            id: skill.id,
            name: skill.name.clone(),
            level: skill.level,
            percentage: skill.level.percentage(),
            icon_url: skill.icon_url.clone(),
        };

        match groups.iter_mut().find(|g| g.category == skill.category) {
            Some(group) => group.skills.push(bar),
            None => groups.push(SkillGroup {
                category: skill.category,
                display_name: skill.category.display_name().to_string(),
                skills: vec![bar],
            }),
        }
    }

    SkillsView {
        groups,
        tech_stack: skills.iter().map(|s| s.name.clone()).collect(),
    }
}

pub fn render_education(education: &[Education]) -> Vec<EducationEntry> {
    education
        .iter()
        .map(|e| {
            let is_current = e.is_current.unwrap_or(false);
            EducationEntry {
                id: e.id,
                degree: e.degree.clone(),
                institution: e.institution.clone(),
                location: e.location.clone(),
                years: formatting::years_label(e.start_year, e.end_year, is_current),
                is_current,
                gpa: e.gpa.clone(),
                description: e.description.clone(),
            }
        })
        .collect()
}

/// `None` hides the section.
pub fn render_certifications(
    certifications: &[Certification],
    today: NaiveDate,
) -> Option<Vec<CertificationCard>> {
    if certifications.is_empty() {
        return None;
    }

    Some(
        certifications
            .iter()
            .map(|c| CertificationCard {
                id: c.id,
                title: c.title.clone(),
                issuer: c.issuer.clone(),
                issued: formatting::non_blank(c.issue_date.as_deref()).map(formatting::month_year),
                expires: formatting::non_blank(c.expiry_date.as_deref()).map(formatting::month_year),
                status: formatting::expiry_status(c.expiry_date.as_deref(), today),
                credential_url: c.credential_url.clone(),
                image_url: c.image_url.clone(),
            })
            .collect(),
    )
}

/// `None` hides the section.
pub fn render_volunteering(volunteering: &[Volunteering]) -> Option<Vec<VolunteeringEntry>> {
    if volunteering.is_empty() {
        return None;
    }

    Some(
        volunteering
            .iter()
            .map(|v| {
                let currently_active = v.is_current.unwrap_or(false);
                VolunteeringEntry {
                    id: v.id,
                    title: v.title.clone(),
                    organization: v.organization.clone(),
                    location: v.location.clone(),
                    period: formatting::period_label(
                        &v.start_date,
                        v.end_date.as_deref(),
                        currently_active,
                    ),
                    currently_active,
                    description: v.description.clone(),
                }
            })
            .collect(),
    )
}

pub fn render_contacts(contacts: &[Contact]) -> Vec<ContactCard> {
    contacts.iter().map(contact_card).collect()
}

pub fn render_footer(contacts: &[Contact], site: &SiteConfig, today: NaiveDate) -> FooterView {
    let year = today.year();

    FooterView {
        brand: site.owner_name.clone(),
        social: contacts
            .iter()
            .filter(|c| c.contact_type == SOCIAL_CONTACT_TYPE)
            .map(contact_card)
            .collect(),
        quick_links: FOOTER_QUICK_LINKS
            .iter()
            .map(|s| NavLink::anchor(s))
            .collect(),
        year,
        copyright: format!("© {} {}", year, site.owner_name),
    }
}

fn contact_card(contact: &Contact) -> ContactCard {
    ContactCard {
        id: contact.id,
        label: contact.label.clone(),
        value: contact.value.clone(),
        contact_type: contact.contact_type.clone(),
        icon: formatting::contact_icon(contact.icon.as_deref()).to_string(),
        is_primary: contact.is_primary.unwrap_or(false),
    }
}

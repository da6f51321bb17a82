pub mod entities;
pub mod formatting;
pub mod sections;
pub mod site;

pub use entities::{
    Certification, Contact, Education, Experience, Profile, Project, Skill, SkillCategory,
    SkillLevel, Volunteering,
};
pub use site::SiteConfig;

// src/modules/portfolio/domain/site.rs

use std::env;

pub const DEFAULT_OWNER_NAME: &str = "Aryan";
pub const DEFAULT_TAGLINE: &str =
    "Passionate about building innovative AI solutions and creating seamless user experiences.";

const DEFAULT_ROLES: [&str; 5] = [
    "AI Engineer",
    "Full-Stack Developer",
    "Machine Learning Specialist",
    "Software Architect",
    "Data Scientist",
];

/// Static copy shown when the profile row is missing or incomplete.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub owner_name: String,
    pub roles: Vec<String>,
    pub tagline: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner_name: DEFAULT_OWNER_NAME.to_string(),
            roles: DEFAULT_ROLES.iter().map(|r| r.to_string()).collect(),
            tagline: DEFAULT_TAGLINE.to_string(),
        }
    }
}

impl SiteConfig {
    /// `SITE_OWNER_NAME` overrides the brand name; everything else is fixed copy.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(name) = env::var("SITE_OWNER_NAME") {
            let name = name.trim();
            if !name.is_empty() {
                config.owner_name = name.to_string();
            }
        }
        config
    }
}

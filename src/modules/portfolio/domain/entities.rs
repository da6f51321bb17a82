// src/modules/portfolio/domain/entities.rs
//
// Rows as the backend returns them. Nullable columns stay `Option` here;
// the rendering layer decides what a missing value looks like.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub name: String,
    pub title: String,
    pub bio: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub avatar_url: Option<String>,
    pub banner_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub image_url: Option<String>,
    pub is_featured: Option<bool>,
    pub sort_order: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    /// `date` column, `YYYY-MM-DD`
    pub start_date: String,
    pub end_date: Option<String>,
    pub is_current: Option<bool>,
    pub description: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub sort_order: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Frontend,
    Backend,
    AiMl,
    Tools,
    Other,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 5] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::AiMl,
        SkillCategory::Tools,
        SkillCategory::Other,
    ];

    /// Value of the backend `skill_category` enum
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Frontend => "frontend",
            SkillCategory::Backend => "backend",
            SkillCategory::AiMl => "ai_ml",
            SkillCategory::Tools => "tools",
            SkillCategory::Other => "other",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::AiMl => "AI/ML",
            SkillCategory::Tools => "Tools",
            SkillCategory::Other => "Other",
        }
    }
}

impl std::str::FromStr for SkillCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SkillCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("Unknown skill category: {}", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    pub const ALL: [SkillLevel; 4] = [
        SkillLevel::Beginner,
        SkillLevel::Intermediate,
        SkillLevel::Advanced,
        SkillLevel::Expert,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "beginner",
            SkillLevel::Intermediate => "intermediate",
            SkillLevel::Advanced => "advanced",
            SkillLevel::Expert => "expert",
        }
    }

    /// Width of the proficiency bar.
    pub fn percentage(&self) -> u8 {
        match self {
            SkillLevel::Beginner => 25,
            SkillLevel::Intermediate => 50,
            SkillLevel::Advanced => 75,
            SkillLevel::Expert => 100,
        }
    }
}

impl std::str::FromStr for SkillLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SkillLevel::ALL
            .into_iter()
            .find(|l| l.as_str() == s)
            .ok_or_else(|| format!("Unknown skill level: {}", s))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: Uuid,
    pub name: String,
    pub category: SkillCategory,
    pub level: SkillLevel,
    pub icon_url: Option<String>,
    pub sort_order: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub id: Uuid,
    pub degree: String,
    pub institution: String,
    pub location: Option<String>,
    pub gpa: Option<String>,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
    pub is_current: Option<bool>,
    pub description: Option<String>,
    pub sort_order: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub id: Uuid,
    pub title: String,
    pub issuer: String,
    pub issue_date: Option<String>,
    pub expiry_date: Option<String>,
    pub credential_url: Option<String>,
    pub image_url: Option<String>,
    pub sort_order: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Volunteering {
    pub id: Uuid,
    pub title: String,
    pub organization: String,
    pub location: Option<String>,
    pub start_date: String,
    pub end_date: Option<String>,
    pub is_current: Option<bool>,
    pub description: Option<String>,
    pub sort_order: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: Uuid,
    pub label: String,
    pub value: String,
    /// Free-form kind; `"social"` contacts also appear in the footer.
    #[serde(rename = "type")]
    pub contact_type: String,
    pub icon: Option<String>,
    pub is_public: Option<bool>,
    pub is_primary: Option<bool>,
    pub sort_order: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_skill_enums_use_backend_spelling() {
        let skill: Skill = serde_json::from_value(json!({
            "id": "5f0c6a43-2f5e-4b49-9a55-2b8d7b1e6c11",
            "name": "PyTorch",
            "category": "ai_ml",
            "level": "advanced",
            "icon_url": null,
            "sort_order": 3,
            "created_at": "2024-01-01T00:00:00+00:00",
            "updated_at": "2024-01-01T00:00:00+00:00"
        }))
        .unwrap();

        assert_eq!(skill.category, SkillCategory::AiMl);
        assert_eq!(skill.level, SkillLevel::Advanced);
        assert_eq!(skill.category.display_name(), "AI/ML");
    }

    #[test]
    fn test_level_percentages() {
        let percentages: Vec<u8> = SkillLevel::ALL.iter().map(|l| l.percentage()).collect();
        assert_eq!(percentages, vec![25, 50, 75, 100]);
    }

    #[test]
    fn test_category_from_str_round_trips_known_values() {
        for category in SkillCategory::ALL {
            assert_eq!(category.as_str().parse::<SkillCategory>(), Ok(category));
        }
        assert!("mobile".parse::<SkillCategory>().is_err());
    }

    #[test]
    fn test_contact_type_column_is_renamed() {
        let contact: Contact = serde_json::from_value(json!({
            "id": "0b7e2a0e-8f59-4a2c-9d0e-0d5c1f1a9b01",
            "label": "GitHub",
            "value": "https://github.com/aryan",
            "type": "social",
            "icon": "Github",
            "is_public": true,
            "is_primary": null,
            "sort_order": null,
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z"
        }))
        .unwrap();

        assert_eq!(contact.contact_type, "social");
        assert_eq!(contact.is_primary, None);
    }
}

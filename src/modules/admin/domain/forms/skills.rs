// src/modules/admin/domain/forms/skills.rs

use serde::Serialize;
use serde_json::{json, Value};

use super::fields::{self, FieldInput, FieldSpec, FormInput, SelectOption};
use super::AdminForm;
use crate::modules::portfolio::domain::{SkillCategory, SkillLevel};
use crate::shared::validation::FieldErrors;

/// Category and level take the backend enum values so a submitted skill
/// could be inserted as-is.
pub struct SkillForm;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillFormValues {
    pub name: String,
    pub category: SkillCategory,
    pub level: SkillLevel,
    pub sort_order: i32,
}

fn category_options() -> Vec<SelectOption> {
    SkillCategory::ALL
        .iter()
        .map(|c| SelectOption {
            value: c.as_str().to_string(),
            label: c.display_name().to_string(),
        })
        .collect()
}

fn level_options() -> Vec<SelectOption> {
    SkillLevel::ALL
        .iter()
        .map(|l| {
            let value = l.as_str();
            let mut label = value.to_string();
            label[..1].make_ascii_uppercase();
            SelectOption {
                value: value.to_string(),
                label,
            }
        })
        .collect()
}

/// Required select; `None` means an error was recorded.
fn choice<T: std::str::FromStr>(
    input: &FormInput,
    errors: &mut FieldErrors,
    key: &str,
    label: &str,
) -> Option<T> {
    let raw = fields::text(input, errors, key);
    if raw.is_empty() {
        errors.add(key, format!("{} is required", label));
        return None;
    }
    match raw.parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            errors.add(key, format!("Invalid {}", label.to_lowercase()));
            None
        }
    }
}

impl AdminForm for SkillForm {
    type Values = SkillFormValues;

    fn title() -> &'static str {
        "Skills"
    }

    fn fields() -> Vec<FieldSpec> {
        vec![
            FieldSpec::new("name", "Name", FieldInput::Text).required(),
            FieldSpec::new("category", "Category", FieldInput::Select)
                .required()
                .options(category_options()),
            FieldSpec::new("level", "Level", FieldInput::Select)
                .required()
                .options(level_options()),
            FieldSpec::new("sort_order", "Sort Order", FieldInput::Number),
        ]
    }

    fn defaults() -> Value {
        json!({
            "name": "",
            "sort_order": 0,
        })
    }

    fn validate(input: &FormInput) -> Result<SkillFormValues, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = fields::required_text(input, &mut errors, "name", "Name");
        let category = choice::<SkillCategory>(input, &mut errors, "category", "Category");
        let level = choice::<SkillLevel>(input, &mut errors, "level", "Level");
        let sort_order = fields::sort_order(input, &mut errors, "sort_order");

        match (category, level) {
            (Some(category), Some(level)) if errors.is_empty() => Ok(SkillFormValues {
                name,
                category,
                level,
                sort_order,
            }),
            _ => Err(errors),
        }
    }
}

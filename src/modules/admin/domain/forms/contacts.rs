// src/modules/admin/domain/forms/contacts.rs

use serde::Serialize;
use serde_json::{json, Value};

use super::fields::{self, FieldInput, FieldSpec, FormInput, SelectOption};
use super::AdminForm;
use crate::shared::validation::FieldErrors;

const ICONS: [&str; 6] = ["Mail", "Phone", "Github", "Linkedin", "Twitter", "Globe"];

pub struct ContactForm;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactFormValues {
    pub label: String,
    pub value: String,
    #[serde(rename = "type")]
    pub contact_type: String,
    pub icon: Option<String>,
    pub is_public: bool,
    pub is_primary: bool,
    pub sort_order: i32,
}

impl AdminForm for ContactForm {
    type Values = ContactFormValues;

    fn title() -> &'static str {
        "Contacts"
    }

    fn fields() -> Vec<FieldSpec> {
        let icons = ICONS
            .iter()
            .map(|icon| SelectOption {
                value: icon.to_string(),
                label: icon.to_string(),
            })
            .collect();

        vec![
            FieldSpec::new("label", "Label", FieldInput::Text).required(),
            FieldSpec::new("value", "Value", FieldInput::Text).required(),
            FieldSpec::new("type", "Type", FieldInput::Text).required(),
            FieldSpec::new("icon", "Icon", FieldInput::Select).options(icons),
            FieldSpec::new("is_public", "Show on site", FieldInput::Checkbox),
            FieldSpec::new("is_primary", "Primary", FieldInput::Checkbox),
            FieldSpec::new("sort_order", "Sort Order", FieldInput::Number),
        ]
    }

    fn defaults() -> Value {
        json!({
            "label": "",
            "value": "",
            "type": "",
            "icon": "",
            "is_public": true,
            "is_primary": false,
            "sort_order": 0,
        })
    }

    fn validate(input: &FormInput) -> Result<ContactFormValues, FieldErrors> {
        let mut errors = FieldErrors::new();

        let values = ContactFormValues {
            label: fields::required_text(input, &mut errors, "label", "Label"),
            value: fields::required_text(input, &mut errors, "value", "Value"),
            contact_type: fields::required_text(input, &mut errors, "type", "Type"),
            icon: fields::optional_text(input, &mut errors, "icon"),
            is_public: fields::flag_or(input, &mut errors, "is_public", true),
            is_primary: fields::flag(input, &mut errors, "is_primary"),
            sort_order: fields::sort_order(input, &mut errors, "sort_order"),
        };

        errors.into_result(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_defaults_to_public() {
        let form = json!({
            "label": "GitHub",
            "value": "https://github.com/jane",
            "type": "social",
            "icon": "Github"
        });
        let values = ContactForm::validate(form.as_object().unwrap()).unwrap();

        assert!(values.is_public);
        assert!(!values.is_primary);
        assert_eq!(values.icon.as_deref(), Some("Github"));

        let encoded = serde_json::to_value(&values).unwrap();
        assert_eq!(encoded["type"], "social");
    }

    #[test]
    fn test_requires_type() {
        let form = json!({ "label": "Email", "value": "jane@example.com" });
        let errors = ContactForm::validate(form.as_object().unwrap()).unwrap_err();

        assert_eq!(errors.get("type"), Some("Type is required"));
    }
}

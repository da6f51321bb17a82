// src/modules/admin/domain/forms/volunteering.rs

use serde::Serialize;
use serde_json::{json, Value};

use super::fields::{self, FieldInput, FieldSpec, FormInput};
use super::AdminForm;
use crate::shared::validation::FieldErrors;

pub struct VolunteeringForm;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VolunteeringFormValues {
    pub title: String,
    pub organization: String,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub is_current: bool,
    pub description: Option<String>,
    pub sort_order: i32,
}

impl AdminForm for VolunteeringForm {
    type Values = VolunteeringFormValues;

    fn title() -> &'static str {
        "Volunteering"
    }

    fn fields() -> Vec<FieldSpec> {
        vec![
            FieldSpec::new("title", "Title", FieldInput::Text).required(),
            FieldSpec::new("organization", "Organization", FieldInput::Text).required(),
            FieldSpec::new("location", "Location", FieldInput::Text),
            FieldSpec::new("start_date", "Start Date", FieldInput::Date),
            FieldSpec::new("end_date", "End Date", FieldInput::Date),
            FieldSpec::new("is_current", "Currently active", FieldInput::Checkbox),
            FieldSpec::new("description", "Description", FieldInput::Textarea),
            FieldSpec::new("sort_order", "Sort Order", FieldInput::Number),
        ]
    }

    fn defaults() -> Value {
        json!({
            "title": "",
            "organization": "",
            "location": "",
            "start_date": "",
            "end_date": "",
            "is_current": false,
            "description": "",
            "sort_order": 0,
        })
    }

    fn validate(input: &FormInput) -> Result<VolunteeringFormValues, FieldErrors> {
        let mut errors = FieldErrors::new();

        let values = VolunteeringFormValues {
            title: fields::required_text(input, &mut errors, "title", "Title"),
            organization: fields::required_text(input, &mut errors, "organization", "Organization"),
            location: fields::optional_text(input, &mut errors, "location"),
            start_date: fields::optional_text(input, &mut errors, "start_date"),
            end_date: fields::optional_text(input, &mut errors, "end_date"),
            is_current: fields::flag(input, &mut errors, "is_current"),
            description: fields::optional_text(input, &mut errors, "description"),
            sort_order: fields::sort_order(input, &mut errors, "sort_order"),
        };

        errors.into_result(values)
    }
}

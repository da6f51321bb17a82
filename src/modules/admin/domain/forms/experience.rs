// src/modules/admin/domain/forms/experience.rs

use serde::Serialize;
use serde_json::{json, Value};

use super::fields::{self, FieldInput, FieldSpec, FormInput};
use super::AdminForm;
use crate::shared::validation::FieldErrors;

pub struct ExperienceForm;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExperienceFormValues {
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub is_current: bool,
    pub description: Option<String>,
    pub technologies: Vec<String>,
    pub sort_order: i32,
}

impl AdminForm for ExperienceForm {
    type Values = ExperienceFormValues;

    fn title() -> &'static str {
        "Experience"
    }

    fn fields() -> Vec<FieldSpec> {
        vec![
            FieldSpec::new("title", "Title", FieldInput::Text).required(),
            FieldSpec::new("company", "Company", FieldInput::Text).required(),
            FieldSpec::new("location", "Location", FieldInput::Text),
            FieldSpec::new("start_date", "Start Date", FieldInput::Date),
            FieldSpec::new("end_date", "End Date", FieldInput::Date),
            FieldSpec::new("is_current", "I currently work here", FieldInput::Checkbox),
            FieldSpec::new("description", "Description", FieldInput::Textarea),
            FieldSpec::new("technologies", "Technologies (comma separated)", FieldInput::Text),
            FieldSpec::new("sort_order", "Sort Order", FieldInput::Number),
        ]
    }

    fn defaults() -> Value {
        json!({
            "title": "",
            "company": "",
            "location": "",
            "start_date": "",
            "end_date": "",
            "is_current": false,
            "description": "",
            "technologies": "",
            "sort_order": 0,
        })
    }

    fn validate(input: &FormInput) -> Result<ExperienceFormValues, FieldErrors> {
        let mut errors = FieldErrors::new();

        let values = ExperienceFormValues {
            title: fields::required_text(input, &mut errors, "title", "Title"),
            company: fields::required_text(input, &mut errors, "company", "Company"),
            location: fields::optional_text(input, &mut errors, "location"),
            start_date: fields::optional_text(input, &mut errors, "start_date"),
            end_date: fields::optional_text(input, &mut errors, "end_date"),
            is_current: fields::flag(input, &mut errors, "is_current"),
            description: fields::optional_text(input, &mut errors, "description"),
            technologies: fields::split_list(&fields::text(input, &mut errors, "technologies")),
            sort_order: fields::sort_order(input, &mut errors, "sort_order"),
        };

        errors.into_result(values)
    }
}

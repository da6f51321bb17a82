// src/modules/admin/domain/forms/education.rs

use serde::Serialize;
use serde_json::{json, Value};

use super::fields::{self, FieldInput, FieldSpec, FormInput};
use super::AdminForm;
use crate::shared::validation::FieldErrors;

pub struct EducationForm;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EducationFormValues {
    pub degree: String,
    pub institution: String,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub is_current: bool,
    pub gpa: Option<String>,
    pub description: Option<String>,
    pub sort_order: i32,
}

impl AdminForm for EducationForm {
    type Values = EducationFormValues;

    fn title() -> &'static str {
        "Education"
    }

    fn fields() -> Vec<FieldSpec> {
        vec![
            FieldSpec::new("degree", "Degree", FieldInput::Text).required(),
            FieldSpec::new("institution", "Institution", FieldInput::Text).required(),
            FieldSpec::new("location", "Location", FieldInput::Text),
            FieldSpec::new("start_date", "Start Date", FieldInput::Date),
            FieldSpec::new("end_date", "End Date", FieldInput::Date),
            FieldSpec::new("is_current", "Currently studying", FieldInput::Checkbox),
            FieldSpec::new("gpa", "GPA", FieldInput::Text),
            FieldSpec::new("description", "Description", FieldInput::Textarea),
            FieldSpec::new("sort_order", "Sort Order", FieldInput::Number),
        ]
    }

    fn defaults() -> Value {
        json!({
            "degree": "",
            "institution": "",
            "location": "",
            "start_date": "",
            "end_date": "",
            "is_current": false,
            "gpa": "",
            "description": "",
            "sort_order": 0,
        })
    }

    fn validate(input: &FormInput) -> Result<EducationFormValues, FieldErrors> {
        let mut errors = FieldErrors::new();

        let values = EducationFormValues {
            degree: fields::required_text(input, &mut errors, "degree", "Degree"),
            institution: fields::required_text(input, &mut errors, "institution", "Institution"),
            location: fields::optional_text(input, &mut errors, "location"),
            start_date: fields::optional_text(input, &mut errors, "start_date"),
            end_date: fields::optional_text(input, &mut errors, "end_date"),
            is_current: fields::flag(input, &mut errors, "is_current"),
            gpa: fields::optional_text(input, &mut errors, "gpa"),
            description: fields::optional_text(input, &mut errors, "description"),
            sort_order: fields::sort_order(input, &mut errors, "sort_order"),
        };

        errors.into_result(values)
    }
}

// src/modules/admin/domain/forms/projects.rs

use serde::Serialize;
use serde_json::{json, Value};

use super::fields::{self, FieldInput, FieldSpec, FormInput};
use super::AdminForm;
use crate::shared::validation::FieldErrors;

pub struct ProjectForm;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectFormValues {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub image_url: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub sort_order: i32,
}

impl AdminForm for ProjectForm {
    type Values = ProjectFormValues;

    fn title() -> &'static str {
        "Projects"
    }

    fn fields() -> Vec<FieldSpec> {
        vec![
            FieldSpec::new("title", "Title", FieldInput::Text).required(),
            FieldSpec::new("description", "Description", FieldInput::Textarea),
            FieldSpec::new("technologies", "Technologies (comma separated)", FieldInput::Text),
            FieldSpec::new("github_url", "GitHub URL", FieldInput::Url),
            FieldSpec::new("live_url", "Live URL", FieldInput::Url),
            FieldSpec::new("image_url", "Image URL", FieldInput::Url),
            FieldSpec::new("start_date", "Start Date", FieldInput::Date),
            FieldSpec::new("end_date", "End Date", FieldInput::Date),
            FieldSpec::new("sort_order", "Sort Order", FieldInput::Number),
        ]
    }

    fn defaults() -> Value {
        json!({
            "title": "",
            "description": "",
            "technologies": "",
            "github_url": "",
            "live_url": "",
            "image_url": "",
            "start_date": "",
            "end_date": "",
            "sort_order": 0,
        })
    }

    fn validate(input: &FormInput) -> Result<ProjectFormValues, FieldErrors> {
        let mut errors = FieldErrors::new();

        let values = ProjectFormValues {
            title: fields::required_text(input, &mut errors, "title", "Title"),
            description: fields::text(input, &mut errors, "description"),
            technologies: fields::split_list(&fields::text(input, &mut errors, "technologies")),
            github_url: fields::url_or_empty(input, &mut errors, "github_url"),
            live_url: fields::url_or_empty(input, &mut errors, "live_url"),
            image_url: fields::url_or_empty(input, &mut errors, "image_url"),
            start_date: fields::optional_text(input, &mut errors, "start_date"),
            end_date: fields::optional_text(input, &mut errors, "end_date"),
            sort_order: fields::sort_order(input, &mut errors, "sort_order"),
        };

        errors.into_result(values)
    }
}

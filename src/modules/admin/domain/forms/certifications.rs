// src/modules/admin/domain/forms/certifications.rs

use serde::Serialize;
use serde_json::{json, Value};

use super::fields::{self, FieldInput, FieldSpec, FormInput};
use super::AdminForm;
use crate::shared::validation::FieldErrors;

pub struct CertificationForm;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CertificationFormValues {
    pub title: String,
    pub issuer: String,
    pub issue_date: Option<String>,
    pub expiry_date: Option<String>,
    pub credential_url: Option<String>,
    pub description: Option<String>,
    pub certificate_image_url: Option<String>,
    pub sort_order: i32,
}

impl AdminForm for CertificationForm {
    type Values = CertificationFormValues;

    fn title() -> &'static str {
        "Certifications"
    }

    fn fields() -> Vec<FieldSpec> {
        vec![
            FieldSpec::new("title", "Title", FieldInput::Text).required(),
            FieldSpec::new("issuer", "Issuer", FieldInput::Text).required(),
            FieldSpec::new("issue_date", "Issue Date", FieldInput::Date),
            FieldSpec::new("expiry_date", "Expiry Date", FieldInput::Date),
            FieldSpec::new("credential_url", "Credential URL", FieldInput::Url),
            FieldSpec::new("description", "Description", FieldInput::Textarea),
            FieldSpec::new(
                "certificate_image_url",
                "Certificate Image URL",
                FieldInput::Url,
            ),
            FieldSpec::new("sort_order", "Sort Order", FieldInput::Number),
        ]
    }

    fn defaults() -> Value {
        json!({
            "title": "",
            "issuer": "",
            "issue_date": "",
            "expiry_date": "",
            "credential_url": "",
            "description": "",
            "certificate_image_url": "",
            "sort_order": 0,
        })
    }

    fn validate(input: &FormInput) -> Result<CertificationFormValues, FieldErrors> {
        let mut errors = FieldErrors::new();

        let values = CertificationFormValues {
            title: fields::required_text(input, &mut errors, "title", "Title"),
            issuer: fields::required_text(input, &mut errors, "issuer", "Issuer"),
            issue_date: fields::optional_text(input, &mut errors, "issue_date"),
            expiry_date: fields::optional_text(input, &mut errors, "expiry_date"),
            credential_url: fields::url_or_empty(input, &mut errors, "credential_url"),
            description: fields::optional_text(input, &mut errors, "description"),
            certificate_image_url: fields::url_or_empty(
                input,
                &mut errors,
                "certificate_image_url",
            ),
            sort_order: fields::sort_order(input, &mut errors, "sort_order"),
        };

        errors.into_result(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_certification() {
        let form = json!({
            "title": "Solutions Architect",
            "issuer": "AWS",
            "issue_date": "2023-04-01",
            "credential_url": "https://aws.amazon.com/verify/123",
            "certificate_image_url": "",
            "sort_order": 1
        });
        let values = CertificationForm::validate(form.as_object().unwrap()).unwrap();

        assert_eq!(values.issue_date.as_deref(), Some("2023-04-01"));
        assert_eq!(values.certificate_image_url, None);
    }

    #[test]
    fn test_rejects_bad_credential_url() {
        let form = json!({
            "title": "Solutions Architect",
            "issuer": "AWS",
            "credential_url": "aws/verify/123"
        });
        let errors = CertificationForm::validate(form.as_object().unwrap()).unwrap_err();

        assert_eq!(errors.get("credential_url"), Some("Invalid url"));
    }
}

// src/modules/admin/domain/forms/profile.rs

use serde::Serialize;
use serde_json::{json, Value};

use super::fields::{self, FieldInput, FieldSpec, FormInput};
use super::AdminForm;
use crate::shared::validation::{self, FieldErrors};

/// Unlike the other forms, every link here must be a real URL; an empty
/// string is rejected.
pub struct ProfileForm;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileFormValues {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub github: String,
    pub website: String,
    pub avatar_url: String,
    pub banner_url: String,
}

const URL_FIELDS: [(&str, &str); 5] = [
    ("linkedin", "LinkedIn"),
    ("github", "GitHub"),
    ("website", "Website"),
    ("avatar_url", "Avatar URL"),
    ("banner_url", "Banner URL"),
];

impl AdminForm for ProfileForm {
    type Values = ProfileFormValues;

    fn title() -> &'static str {
        "Profile"
    }

    fn fields() -> Vec<FieldSpec> {
        let mut specs = vec![
            FieldSpec::new("name", "Name", FieldInput::Text).required(),
            FieldSpec::new("title", "Title", FieldInput::Text).required(),
            FieldSpec::new("bio", "Bio", FieldInput::Textarea),
            FieldSpec::new("email", "Email", FieldInput::Email),
            FieldSpec::new("phone", "Phone", FieldInput::Text),
            FieldSpec::new("location", "Location", FieldInput::Text),
        ];
        specs.extend(
            URL_FIELDS
                .iter()
                .map(|(name, label)| FieldSpec::new(name, label, FieldInput::Url)),
        );
        specs
    }

    fn defaults() -> Value {
        json!({
            "name": "",
            "title": "",
            "bio": "",
            "email": "",
            "phone": "",
            "location": "",
            "linkedin": "",
            "github": "",
            "website": "",
            "avatar_url": "",
            "banner_url": "",
        })
    }

    fn validate(input: &FormInput) -> Result<ProfileFormValues, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = fields::required_text(input, &mut errors, "name", "Name");
        let title = fields::required_text(input, &mut errors, "title", "Title");
        let bio = fields::text(input, &mut errors, "bio");

        let email = fields::text(input, &mut errors, "email");
        if !validation::is_valid_email(&email) {
            errors.add("email", "Invalid email");
        }

        let phone = fields::text(input, &mut errors, "phone");
        let location = fields::text(input, &mut errors, "location");

        let mut url = |key: &str| {
            let value = fields::text(input, &mut errors, key);
            fields::check_url(&mut errors, key, &value);
            value
        };
        let linkedin = url("linkedin");
        let github = url("github");
        let website = url("website");
        let avatar_url = url("avatar_url");
        let banner_url = url("banner_url");

        errors.into_result(ProfileFormValues {
            name,
            title,
            bio,
            email,
            phone,
            location,
            linkedin,
            github,
            website,
            avatar_url,
            banner_url,
        })
    }
}

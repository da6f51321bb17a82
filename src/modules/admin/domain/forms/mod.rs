//! One schema per content type. Each form reads a raw JSON object, applies
//! its rules, and returns either normalized values or per-field messages.

mod certifications;
mod contacts;
mod education;
mod experience;
pub mod fields;
mod profile;
mod projects;
mod skills;
mod volunteering;

use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

pub use certifications::{CertificationForm, CertificationFormValues};
pub use contacts::{ContactForm, ContactFormValues};
pub use education::{EducationForm, EducationFormValues};
pub use experience::{ExperienceForm, ExperienceFormValues};
pub use fields::{FieldSpec, FormInput};
pub use profile::{ProfileForm, ProfileFormValues};
pub use projects::{ProjectForm, ProjectFormValues};
pub use skills::{SkillForm, SkillFormValues};
pub use volunteering::{VolunteeringForm, VolunteeringFormValues};

use crate::shared::validation::FieldErrors;

pub trait AdminForm {
    type Values;

    fn title() -> &'static str;
    fn fields() -> Vec<FieldSpec>;
    fn defaults() -> Value;
    fn validate(input: &FormInput) -> Result<Self::Values, FieldErrors>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormKind {
    Profile,
    Projects,
    Experience,
    Skills,
    Education,
    Certifications,
    Volunteering,
    Contacts,
}

impl FormKind {
    pub const ALL: [FormKind; 8] = [
        FormKind::Profile,
        FormKind::Projects,
        FormKind::Experience,
        FormKind::Skills,
        FormKind::Education,
        FormKind::Certifications,
        FormKind::Volunteering,
        FormKind::Contacts,
    ];

    /// Path segment, matching the admin page it belongs to.
    pub fn slug(&self) -> &'static str {
        match self {
            FormKind::Profile => "profile",
            FormKind::Projects => "projects",
            FormKind::Experience => "experience",
            FormKind::Skills => "skills",
            FormKind::Education => "education",
            FormKind::Certifications => "certifications",
            FormKind::Volunteering => "volunteering",
            FormKind::Contacts => "contacts",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        FormKind::ALL.into_iter().find(|k| k.slug() == slug)
    }

    pub fn schema(&self) -> FormSchema {
        match self {
            FormKind::Profile => schema_of::<ProfileForm>(*self),
            FormKind::Projects => schema_of::<ProjectForm>(*self),
            FormKind::Experience => schema_of::<ExperienceForm>(*self),
            FormKind::Skills => schema_of::<SkillForm>(*self),
            FormKind::Education => schema_of::<EducationForm>(*self),
            FormKind::Certifications => schema_of::<CertificationForm>(*self),
            FormKind::Volunteering => schema_of::<VolunteeringForm>(*self),
            FormKind::Contacts => schema_of::<ContactForm>(*self),
        }
    }

    pub fn validate(&self, input: &FormInput) -> Result<FormValues, FieldErrors> {
        match self {
            FormKind::Profile => ProfileForm::validate(input).map(FormValues::Profile),
            FormKind::Projects => ProjectForm::validate(input).map(FormValues::Projects),
            FormKind::Experience => ExperienceForm::validate(input).map(FormValues::Experience),
            FormKind::Skills => SkillForm::validate(input).map(FormValues::Skills),
            FormKind::Education => EducationForm::validate(input).map(FormValues::Education),
            FormKind::Certifications => {
                CertificationForm::validate(input).map(FormValues::Certifications)
            }
            FormKind::Volunteering => {
                VolunteeringForm::validate(input).map(FormValues::Volunteering)
            }
            FormKind::Contacts => ContactForm::validate(input).map(FormValues::Contacts),
        }
    }
}

fn schema_of<F: AdminForm>(kind: FormKind) -> FormSchema {
    FormSchema {
        entity: kind.slug().to_string(),
        title: F::title().to_string(),
        fields: F::fields(),
        defaults: F::defaults(),
    }
}

/// What a form page needs to draw itself.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct FormSchema {
    pub entity: String,
    pub title: String,
    pub fields: Vec<FieldSpec>,
    #[schema(value_type = Object)]
    pub defaults: Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FormValues {
    Profile(ProfileFormValues),
    Projects(ProjectFormValues),
    Experience(ExperienceFormValues),
    Skills(SkillFormValues),
    Education(EducationFormValues),
    Certifications(CertificationFormValues),
    Volunteering(VolunteeringFormValues),
    Contacts(ContactFormValues),
}

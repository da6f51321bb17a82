use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::admin::domain::forms::{FormInput, FormKind, FormValues};
use crate::shared::validation::FieldErrors;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitFormError {
    #[error("Validation failed: {0}")]
    Invalid(FieldErrors),
}

//
// ──────────────────────────────────────────────────────────
// DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SubmittedForm {
    #[schema(value_type = String, example = "projects")]
    pub entity: FormKind,
    #[schema(value_type = Object)]
    pub values: FormValues,
    /// Always false: submissions are logged, not stored.
    pub persisted: bool,
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait SubmitFormUseCase: Send + Sync {
    async fn execute(
        &self,
        kind: FormKind,
        input: FormInput,
    ) -> Result<SubmittedForm, SubmitFormError>;
}

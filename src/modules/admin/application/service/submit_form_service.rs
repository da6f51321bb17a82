use async_trait::async_trait;
use tracing::{info, warn};

use crate::modules::admin::application::ports::incoming::use_cases::{
    SubmitFormError, SubmitFormUseCase, SubmittedForm,
};
use crate::modules::admin::domain::forms::{FormInput, FormKind};

/// Validates and logs. Nothing is written to the backend.
#[derive(Debug, Default)]
pub struct SubmitFormService;

impl SubmitFormService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SubmitFormUseCase for SubmitFormService {
    async fn execute(
        &self,
        kind: FormKind,
        input: FormInput,
    ) -> Result<SubmittedForm, SubmitFormError> {
        match kind.validate(&input) {
            Ok(values) => {
                info!(entity = kind.slug(), values = ?values, "Admin form submitted");
                Ok(SubmittedForm {
                    entity: kind,
                    values,
                    persisted: false,
                })
            }
            Err(errors) => {
                warn!(entity = kind.slug(), fields = errors.len(), "Admin form rejected");
                Err(SubmitFormError::Invalid(errors))
            }
        }
    }
}

use crate::models::{DemoFormFields, FormField};
use serde::Serialize;
use validator::Validate;

/// Outcome of the pre-submission guard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", content = "missing", rename_all = "lowercase")]
pub enum FieldCheck {
    Valid,
    Incomplete(Vec<FormField>),
}

impl FieldCheck {
    pub fn is_valid(&self) -> bool {
        matches!(self, FieldCheck::Valid)
    }

    pub fn missing(&self) -> &[FormField] {
        match self {
            FieldCheck::Valid => &[],
            FieldCheck::Incomplete(fields) => fields,
        }
    }
}

/// Rejects a form whose required inputs are empty. Only presence is checked;
/// the email shape is left to the input control.
pub fn check_required(fields: &DemoFormFields) -> FieldCheck {
    match fields.validate() {
        Ok(()) => FieldCheck::Valid,
        Err(errors) => {
            let failed = errors.field_errors();
            let missing: Vec<FormField> = FormField::ALL
                .into_iter()
                .filter(|field| failed.contains_key(field.as_str()))
                .collect();
            FieldCheck::Incomplete(missing)
        }
    }
}

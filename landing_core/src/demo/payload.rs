use crate::models::{DemoFormFields, DemoRequest};

/// Merges the editable field values with the page-supplied project name.
///
/// No validation happens here; empty strings are carried through as-is.
pub fn build_payload(fields: &DemoFormFields, project: &str) -> DemoRequest {
    DemoRequest {
        name: fields.name.clone(),
        email: fields.email.clone(),
        mobile: fields.mobile.clone(),
        message: fields.message.clone(),
        project: project.to_string(),
    }
}

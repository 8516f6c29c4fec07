//! Demo-request payload and editable form fields

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// One of the user-editable inputs on the demo form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Name,
    Email,
    Mobile,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Mobile,
        FormField::Message,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Mobile => "mobile",
            FormField::Message => "message",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current values of the editable inputs. The `project` field is not part of
/// this record; it belongs to the page hosting the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct DemoFormFields {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Mobile number is required"))]
    pub mobile: String,

    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}

impl DemoFormFields {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        mobile: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            mobile: mobile.into(),
            message: message.into(),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Mobile => &self.mobile,
            FormField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Mobile => self.mobile = value,
            FormField::Message => self.message = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when every editable input is the empty string.
    pub fn is_empty(&self) -> bool {
        FormField::ALL.iter().all(|field| self.get(*field).is_empty())
    }
}

/// The payload transmitted for a single request-a-demo submission.
///
/// `Debug` is hand-written so that contact details never end up in logs by
/// accident; use [`DemoRequest::redacted`] for diagnostics.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoRequest {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub message: String,
    pub project: String,
}

impl DemoRequest {
    pub fn redacted(&self) -> RedactedRequest<'_> {
        RedactedRequest(self)
    }
}

impl fmt::Debug for DemoRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DemoRequest")
            .field("project", &self.project)
            .field("contact", &format_args!("{}", self.redacted()))
            .finish()
    }
}

pub struct RedactedRequest<'a>(&'a DemoRequest);

impl fmt::Display for RedactedRequest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let request = self.0;
        let domain = request
            .email
            .rsplit_once('@')
            .map(|(_, domain)| domain)
            .unwrap_or("-");

        let filled: Vec<&str> = [
            ("name", &request.name),
            ("email", &request.email),
            ("mobile", &request.mobile),
            ("message", &request.message),
        ]
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, _)| *key)
        .collect();

        write!(
            f,
            "project={:?} email_domain={} filled=[{}]",
            request.project,
            domain,
            filled.join(",")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DemoRequest {
        DemoRequest {
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            mobile: "9999999999".to_string(),
            message: "Tell me more".to_string(),
            project: "Supply Chain DApp".to_string(),
        }
    }

    #[test]
    fn test_wire_shape() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "Asha",
                "email": "asha@example.com",
                "mobile": "9999999999",
                "message": "Tell me more",
                "project": "Supply Chain DApp"
            })
        );
    }

    #[test]
    fn test_debug_does_not_leak_contact_details() {
        let rendered = format!("{:?}", sample());
        assert!(rendered.contains("Supply Chain DApp"));
        assert!(rendered.contains("example.com"));
        assert!(!rendered.contains("Asha"));
        assert!(!rendered.contains("9999999999"));
        assert!(!rendered.contains("Tell me more"));
    }

    #[test]
    fn test_redacted_lists_filled_fields() {
        let mut request = sample();
        request.mobile.clear();
        let rendered = request.redacted().to_string();
        assert!(rendered.ends_with("filled=[name,email,message]"));
    }

    #[test]
    fn test_fields_missing_keys_default_to_empty() {
        let fields: DemoFormFields = serde_json::from_str(r#"{"name":"Asha"}"#).unwrap();
        assert_eq!(fields.name, "Asha");
        assert_eq!(fields.email, "");
        assert!(!fields.is_empty());
    }

    #[test]
    fn test_set_get_and_clear() {
        let mut fields = DemoFormFields::default();
        assert!(fields.is_empty());

        fields.set(FormField::Mobile, "12345".to_string());
        assert_eq!(fields.get(FormField::Mobile), "12345");

        fields.clear();
        assert!(fields.is_empty());
    }
}

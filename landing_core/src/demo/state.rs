use super::{
    payload::build_payload,
    validation::{check_required, FieldCheck},
};
use crate::models::{DemoFormFields, DemoRequest, FormField};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Idle => "idle",
            SubmissionStatus::Sending => "sending",
            SubmissionStatus::Success => "success",
            SubmissionStatus::Error => "error",
        }
    }

    /// Inline notice shown under the form, if any.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            SubmissionStatus::Success => Some("Your request has been received!"),
            SubmissionStatus::Error => Some("Something went wrong. Please try again."),
            SubmissionStatus::Idle | SubmissionStatus::Sending => None,
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            SubmissionStatus::Idle => "Submit Request",
            SubmissionStatus::Sending => "Sending...",
            SubmissionStatus::Success => "Sent!",
            SubmissionStatus::Error => "Error. Try Again",
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Edit { field: FormField, value: String },
    Submit,
    Delivered,
    Failed,
}

/// Snapshot of one form instance. Only [`FormState::reduce`] produces new
/// snapshots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormState {
    pub project: String,
    pub fields: DemoFormFields,
    pub status: SubmissionStatus,
    /// Fields that blocked the most recent submit attempt.
    pub missing: Vec<FormField>,
}

impl FormState {
    pub fn new(project: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            ..Self::default()
        }
    }

    pub fn reduce(self, event: FormEvent) -> Self {
        match event {
            FormEvent::Edit { field, value } => {
                let mut fields = self.fields;
                fields.set(field, value);
                Self { fields, ..self }
            }
            FormEvent::Submit => match check_required(&self.fields) {
                FieldCheck::Valid => Self {
                    status: SubmissionStatus::Sending,
                    missing: Vec::new(),
                    ..self
                },
                FieldCheck::Incomplete(missing) => Self { missing, ..self },
            },
            FormEvent::Delivered if self.status == SubmissionStatus::Sending => Self {
                status: SubmissionStatus::Success,
                fields: DemoFormFields::default(),
                ..self
            },
            FormEvent::Failed if self.status == SubmissionStatus::Sending => Self {
                status: SubmissionStatus::Error,
                ..self
            },
            // A transport result with no submission in flight is stale.
            FormEvent::Delivered | FormEvent::Failed => self,
        }
    }

    /// UI hint: the submit control should be disabled while a request is in
    /// flight. `reduce` itself still accepts a resubmission.
    pub fn can_submit(&self) -> bool {
        self.status != SubmissionStatus::Sending
    }

    pub fn payload(&self) -> DemoRequest {
        build_payload(&self.fields, &self.project)
    }
}

use super::{
    state::{FormEvent, FormState, SubmissionStatus},
    transport::SubmissionTransport,
};
use crate::models::{DemoFormFields, FormField};
use std::sync::Arc;
use tracing::debug;

/// A single request-a-demo form bound to a project and a transport.
pub struct DemoForm {
    state: FormState,
    transport: Arc<dyn SubmissionTransport>,
}

impl DemoForm {
    pub fn new(project: impl Into<String>, transport: Arc<dyn SubmissionTransport>) -> Self {
        Self {
            state: FormState::new(project),
            transport,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn status(&self) -> SubmissionStatus {
        self.state.status
    }

    pub fn edit(&mut self, field: FormField, value: impl Into<String>) {
        self.apply(FormEvent::Edit {
            field,
            value: value.into(),
        });
    }

    pub fn fill(&mut self, fields: DemoFormFields) {
        for field in FormField::ALL {
            self.edit(field, fields.get(field));
        }
    }

    /// Runs one submission to completion. Returns the resulting status; an
    /// incomplete form leaves the status untouched and records what is missing.
    pub async fn submit(&mut self) -> SubmissionStatus {
        self.apply(FormEvent::Submit);
        if self.state.status != SubmissionStatus::Sending {
            debug!(missing = ?self.state.missing, "submit blocked by empty fields");
            return self.state.status;
        }

        let payload = self.state.payload();
        let outcome = self.transport.deliver(&payload).await;

        self.apply(if outcome.is_success() {
            FormEvent::Delivered
        } else {
            FormEvent::Failed
        });

        self.state.status
    }

    fn apply(&mut self, event: FormEvent) {
        let current = std::mem::take(&mut self.state);
        self.state = current.reduce(event);
    }
}

//! Request-a-demo submission pipeline: payload builder, required-field guard,
//! transport, and the client-visible status machine.

pub mod form;
pub mod payload;
pub mod state;
pub mod transport;
pub mod validation;

pub use form::DemoForm;
pub use payload::build_payload;
pub use state::{FormEvent, FormState, SubmissionStatus};
pub use transport::{DeliveryOutcome, HttpTransport, SubmissionTransport};
pub use validation::{check_required, FieldCheck};

pub mod demo;
pub mod request;

pub use demo::{DemoFormFields, DemoRequest, FormField, RedactedRequest};
pub use request::{AckStatus, Acknowledgement, ApiResponse};

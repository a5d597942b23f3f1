//! Submission module for turning form webhooks into HubSpot documents.
//!
//! ## Processing Flow
//!
//! ```text
//! WebhookPayload → build_submission() → HubSpotSubmission
//! ```

pub mod mapping;
pub mod types;

pub use mapping::{build_submission, FIELD_MAPPINGS, STATIC_FIELDS};
pub use types::{FormField, HubSpotSubmission, SubmissionContext, WebhookPayload};

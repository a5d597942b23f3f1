//! Form Relay - forwards form submission webhooks to HubSpot.
//!
//! The `form-relay-web` binary receives the forms host's webhook, maps the
//! submitted fields onto HubSpot contact properties and posts them to the
//! HubSpot Forms API.
//!
//! ## Architecture
//!
//! ```text
//! Forms host → Web Server → build_submission() → HubSpotClient → HubSpot
//! ```

pub mod config;
pub mod hubspot;
pub mod submission;
pub mod web;

// Re-export commonly used types
pub use config::Config;
pub use hubspot::{FormSubmitter, HubSpotClient, RemoteResponse, SubmitError};
pub use submission::{build_submission, FormField, HubSpotSubmission, WebhookPayload};
pub use web::AppState;

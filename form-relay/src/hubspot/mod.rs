//! HubSpot Forms API module.
//!
//! This module provides:
//! - The `FormSubmitter` seam used by the web handler
//! - `HubSpotClient`, the reqwest-backed submitter
//! - `SubmitError`, the failures that surface as a 500

pub mod client;
pub mod error;

pub use client::{FormSubmitter, HubSpotClient, RemoteResponse};
pub use error::SubmitError;

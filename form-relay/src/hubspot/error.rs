//! Errors raised while handling a submission.
//!
//! A remote rejection (non-2xx) is not an error here; it is a successful
//! round trip carried by `RemoteResponse`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubmitError {
    /// The inbound webhook body was not valid JSON.
    #[error("invalid webhook payload: {0}")]
    InvalidPayload(#[source] serde_json::Error),

    /// The inbound request body could not be read.
    #[error("failed to read request body: {0}")]
    RequestBody(#[source] axum::extract::rejection::BytesRejection),

    /// The outbound submission document could not be encoded.
    #[error("failed to encode HubSpot submission: {0}")]
    Encode(#[source] serde_json::Error),

    /// The configured submission endpoint is not a valid URL.
    #[error("invalid HubSpot endpoint {url}: {source}")]
    InvalidEndpoint {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The request never completed (connect, TLS, body read).
    #[error("HubSpot request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// HubSpot answered with a body that is not JSON.
    #[error("invalid HubSpot response (status {status}): {source}")]
    InvalidResponse {
        status: u16,
        #[source]
        source: serde_json::Error,
    },
}

//! Webhook endpoint handlers.
//!
//! The form webhook handler:
//! 1. Rejects anything but POST
//! 2. Parses the payload and builds the HubSpot submission
//! 3. Forwards it and translates HubSpot's answer for the caller
//!
//! Parse and transport failures all surface as the same 500 response.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info, warn};

use crate::hubspot::{FormSubmitter, SubmitError};
use crate::submission::{build_submission, WebhookPayload};
use crate::Config;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub submitter: Arc<dyn FormSubmitter>,
}

impl AppState {
    pub fn new(config: Config, submitter: Arc<dyn FormSubmitter>) -> Self {
        Self {
            config: Arc::new(config),
            submitter,
        }
    }
}

// =============================================================================
// Health Check
// =============================================================================

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

// =============================================================================
// Form Webhook
// =============================================================================

/// Body returned when a submission was accepted by HubSpot.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
    pub message: &'static str,
}

/// Body returned for every failure.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ErrorResponse {
    fn new(error: &'static str) -> Self {
        Self {
            error,
            message: None,
            details: None,
        }
    }
}

/// Form submission webhook endpoint.
///
/// Routed for every method so that non-POST requests get a JSON 405 rather
/// than the router's empty one.
pub async fn form_webhook(
    State(state): State<AppState>,
    method: Method,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    info!(
        method = %method,
        body_length = body.as_ref().map(|b| b.len()).ok(),
        "webhook_received"
    );

    if method != Method::POST {
        warn!(method = %method, "webhook_method_not_allowed");
        return (
            StatusCode::METHOD_NOT_ALLOWED,
            Json(ErrorResponse::new("Method not allowed")),
        )
            .into_response();
    }

    let result = match body {
        Ok(body) => forward_submission(&state, &body).await,
        Err(rejection) => Err(SubmitError::RequestBody(rejection)),
    };

    match result {
        Ok(response) => response,
        Err(e) => {
            error!(error = %e, "webhook_handler_error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    message: Some(e.to_string()),
                    ..ErrorResponse::new("Server error")
                }),
            )
                .into_response()
        }
    }
}

/// Parse, map and forward one submission.
///
/// Errors are left to the caller, which reports them all as a 500.
async fn forward_submission(state: &AppState, body: &[u8]) -> Result<Response, SubmitError> {
    let payload = WebhookPayload::from_slice(body).map_err(SubmitError::InvalidPayload)?;

    info!(
        field_names = ?payload.data.keys().collect::<Vec<_>>(),
        "webhook_payload_parsed"
    );

    let submission = build_submission(&payload, &state.config);
    let remote = state.submitter.submit(&submission).await?;

    if !remote.is_success() {
        error!(
            status_code = remote.status.as_u16(),
            details = %remote.body,
            "hubspot_submission_failed"
        );
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                details: Some(remote.body),
                ..ErrorResponse::new("HubSpot submission failed")
            }),
        )
            .into_response());
    }

    info!(status_code = remote.status.as_u16(), "hubspot_submission_succeeded");

    Ok((
        StatusCode::OK,
        Json(SuccessResponse {
            success: true,
            message: "Form submitted successfully to HubSpot",
        }),
    )
        .into_response())
}

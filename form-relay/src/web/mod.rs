//! Web server module for handling inbound form webhooks.
//!
//! This module provides a thin web server that:
//! - Receives form submission webhooks from the forms host
//! - Maps them onto the HubSpot submission schema
//! - Forwards them and reports HubSpot's verdict to the caller

pub mod handlers;

use axum::{
    routing::{any, get},
    Router,
};
use tower_http::trace::TraceLayer;

pub use handlers::{
    form_webhook, health, AppState, ErrorResponse, HealthResponse, SuccessResponse,
};

/// Path the webhook is served on.
pub const WEBHOOK_PATH: &str = "/form-to-hubspot";

/// Path compatible with the forms host's function routing.
pub const FUNCTION_WEBHOOK_PATH: &str = "/.netlify/functions/form-to-hubspot";

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(WEBHOOK_PATH, any(form_webhook))
        .route(FUNCTION_WEBHOOK_PATH, any(form_webhook))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

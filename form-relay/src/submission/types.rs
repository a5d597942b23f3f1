//! Wire types for the inbound webhook and the outbound HubSpot submission.
//!
//! - Inbound: `{ "data": { "firstName": "...", ... } }` from the forms host
//! - Outbound: `{ "fields": [{ "name", "value" }], "context": { ... } }`

use serde::{de::Error as _, Deserialize, Serialize};
use serde_json::{Map, Value};

// =============================================================================
// Inbound Webhook
// =============================================================================

/// Form data extracted from an inbound webhook envelope.
///
/// Only the `data` object of the envelope is kept. A missing or non-object
/// `data` (or a non-object envelope) yields an empty mapping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WebhookPayload {
    pub data: Map<String, Value>,
}

impl WebhookPayload {
    /// Parse a raw request body.
    ///
    /// A `null` envelope has no `data` to read and is rejected; any other
    /// non-object envelope yields an empty mapping.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        let envelope: Value = serde_json::from_slice(body)?;
        if envelope.is_null() {
            return Err(serde_json::Error::custom("cannot read data of null"));
        }
        Ok(Self::from_envelope(envelope))
    }

    /// Extract the `data` mapping from an already-parsed envelope.
    pub fn from_envelope(envelope: Value) -> Self {
        let data = match envelope {
            Value::Object(mut envelope) => match envelope.remove("data") {
                Some(Value::Object(data)) => data,
                _ => Map::new(),
            },
            _ => Map::new(),
        };

        Self { data }
    }

    /// Text of a field when it is present and truthy.
    pub fn field(&self, name: &str) -> Option<String> {
        self.data.get(name).and_then(truthy_text)
    }

    /// Whether a field holds exactly the given string.
    pub fn field_equals(&self, name: &str, expected: &str) -> bool {
        matches!(self.data.get(name), Some(Value::String(s)) if s == expected)
    }
}

/// Render a JSON value as a field value, or `None` when it is falsy.
///
/// Falsy values are `null`, `false`, `0` and the empty string. Strings pass
/// through verbatim; every other value uses its compact JSON text.
fn truthy_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

// =============================================================================
// Outbound Submission
// =============================================================================

/// A single `{name, value}` pair in a HubSpot submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    pub name: String,
    pub value: String,
}

impl FormField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Page context attached to a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionContext {
    pub page_uri: String,
    pub page_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
}

/// Document posted to the HubSpot Forms submission endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HubSpotSubmission {
    pub fields: Vec<FormField>,
    pub context: SubmissionContext,
}

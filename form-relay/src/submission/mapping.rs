//! Field mapping from the inbound form to HubSpot contact properties.

use tracing::{debug, info};

use crate::submission::types::{FormField, HubSpotSubmission, SubmissionContext, WebhookPayload};
use crate::Config;

/// Inbound form field → HubSpot property, in submission order.
pub const FIELD_MAPPINGS: &[(&str, &str)] = &[
    ("firstName", "firstname"),
    ("lastName", "lastname"),
    ("email", "email"),
    ("companyName", "company"),
    ("phoneNumber", "phone"),
    ("message", "message"),
];

/// Properties appended to every submission, after the mapped fields.
pub const STATIC_FIELDS: &[(&str, &str)] = &[("hs_lead_status", "NEW"), ("lifecyclestage", "lead")];

/// Marketing consent checkbox on the inbound form.
const CONSENT_FIELD: &str = "communications";

/// Build the HubSpot submission document for a webhook payload.
///
/// A mapped property is emitted only when its source field is present and
/// truthy. The static lead properties always close the field list.
pub fn build_submission(payload: &WebhookPayload, config: &Config) -> HubSpotSubmission {
    let mut fields: Vec<FormField> = FIELD_MAPPINGS
        .iter()
        .filter_map(|(source, target)| payload.field(source).map(|v| FormField::new(*target, v)))
        .collect();

    if payload.field_equals(CONSENT_FIELD, "yes") {
        // No HubSpot consent property exists on the form yet, so consent is not forwarded.
        debug!("marketing_consent_given");
    }

    fields.extend(
        STATIC_FIELDS
            .iter()
            .map(|(name, value)| FormField::new(*name, *value)),
    );

    let context = SubmissionContext {
        page_uri: payload
            .field("referrer")
            .unwrap_or_else(|| config.default_page_uri.clone()),
        page_name: config.page_name.clone(),
        ip_address: payload.field("ip"),
    };

    info!(
        field_count = fields.len(),
        fields = ?fields.iter().map(|f| f.name.as_str()).collect::<Vec<_>>(),
        page_uri = %context.page_uri,
        has_ip_address = context.ip_address.is_some(),
        "hubspot_fields_prepared"
    );

    HubSpotSubmission { fields, context }
}

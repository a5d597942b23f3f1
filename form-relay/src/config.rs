//! Configuration module for environment variable parsing.
//!
//! The HubSpot portal and form identifiers default to the production contact
//! form; every value can be overridden per deployment.

use std::env;
use tracing::warn;

/// Default HubSpot Forms API host.
pub const DEFAULT_API_BASE: &str = "https://api.hsforms.com";

/// Default HubSpot portal (account) identifier.
pub const DEFAULT_PORTAL_ID: &str = "8070371";

/// Default HubSpot form GUID.
pub const DEFAULT_FORM_ID: &str = "5efde115-8a41-4e38-8176-4b121279ff42";

/// Page URI reported when the submission carries no referrer.
pub const DEFAULT_PAGE_URI: &str = "https://phizzle.com/contact";

/// Page name reported in every submission context.
pub const DEFAULT_PAGE_NAME: &str = "Contact Form - Netlify";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the web server to listen on
    pub port: u16,

    /// Base URL of the HubSpot Forms API
    pub hubspot_api_base: String,

    /// HubSpot portal identifier embedded in the submit URL
    pub hubspot_portal_id: String,

    /// HubSpot form GUID embedded in the submit URL
    pub hubspot_form_id: String,

    /// Fallback `pageUri` for the submission context
    pub default_page_uri: String,

    /// `pageName` for the submission context
    pub page_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            hubspot_api_base: DEFAULT_API_BASE.to_string(),
            hubspot_portal_id: DEFAULT_PORTAL_ID.to_string(),
            hubspot_form_id: DEFAULT_FORM_ID.to_string(),
            default_page_uri: DEFAULT_PAGE_URI.to_string(),
            page_name: DEFAULT_PAGE_NAME.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Config::default();

        Config {
            port: parse_number("PORT", defaults.port),

            hubspot_api_base: non_empty_var("HUBSPOT_API_BASE")
                .unwrap_or(defaults.hubspot_api_base),

            hubspot_portal_id: non_empty_var("HUBSPOT_PORTAL_ID")
                .unwrap_or(defaults.hubspot_portal_id),

            hubspot_form_id: non_empty_var("HUBSPOT_FORM_ID")
                .unwrap_or(defaults.hubspot_form_id),

            default_page_uri: non_empty_var("DEFAULT_PAGE_URI")
                .unwrap_or(defaults.default_page_uri),

            page_name: non_empty_var("PAGE_NAME").unwrap_or(defaults.page_name),
        }
    }

    /// Full URL of the HubSpot form submission endpoint.
    pub fn submit_url(&self) -> String {
        format!(
            "{}/submissions/v3/integration/submit/{}/{}",
            self.hubspot_api_base.trim_end_matches('/'),
            self.hubspot_portal_id,
            self.hubspot_form_id
        )
    }
}

/// Read a variable, treating blank values as unset.
fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse a numeric variable, falling back to `default` when unset or invalid.
fn parse_number<T: std::str::FromStr + Copy>(name: &str, default: T) -> T {
    let raw = match env::var(name) {
        Ok(v) => v,
        Err(_) => return default,
    };

    match raw.trim().parse() {
        Ok(v) => v,
        Err(_) => {
            warn!(env_var = name, value = %raw, "Invalid numeric value, using default");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_default_submit_url() {
        let config = Config::default();
        assert_eq!(
            config.submit_url(),
            "https://api.hsforms.com/submissions/v3/integration/submit/8070371/5efde115-8a41-4e38-8176-4b121279ff42"
        );
    }

    #[test]
    fn test_submit_url_trims_trailing_slash() {
        let config = Config {
            hubspot_api_base: "http://127.0.0.1:9000/".to_string(),
            hubspot_portal_id: "1".to_string(),
            hubspot_form_id: "abc".to_string(),
            ..Config::default()
        };
        assert_eq!(
            config.submit_url(),
            "http://127.0.0.1:9000/submissions/v3/integration/submit/1/abc"
        );
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        env::set_var("HUBSPOT_PORTAL_ID", "42");
        env::set_var("PAGE_NAME", "Landing Page");
        env::set_var("PORT", "3000");

        let config = Config::from_env();
        assert_eq!(config.hubspot_portal_id, "42");
        assert_eq!(config.page_name, "Landing Page");
        assert_eq!(config.port, 3000);
        assert_eq!(config.hubspot_form_id, DEFAULT_FORM_ID);

        env::remove_var("HUBSPOT_PORTAL_ID");
        env::remove_var("PAGE_NAME");
        env::remove_var("PORT");
    }

    #[test]
    #[serial]
    fn test_parse_number_invalid_uses_default() {
        env::set_var("TEST_PORT_VALUE", "not-a-port");
        assert_eq!(parse_number("TEST_PORT_VALUE", 8080u16), 8080);
        env::remove_var("TEST_PORT_VALUE");
    }

    #[test]
    #[serial]
    fn test_blank_var_treated_as_unset() {
        env::set_var("DEFAULT_PAGE_URI", "   ");
        let config = Config::from_env();
        assert_eq!(config.default_page_uri, DEFAULT_PAGE_URI);
        env::remove_var("DEFAULT_PAGE_URI");
    }
}

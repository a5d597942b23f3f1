//! reqwest client for the HubSpot form submission endpoint.

use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client, StatusCode};
use serde_json::Value;
use tracing::{error, info};
use url::Url;

use crate::hubspot::error::SubmitError;
use crate::submission::HubSpotSubmission;
use crate::Config;

/// HubSpot's answer to a submission that completed at the transport level.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl RemoteResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// Something that can deliver a submission to HubSpot.
#[async_trait]
pub trait FormSubmitter: Send + Sync {
    async fn submit(&self, submission: &HubSpotSubmission) -> Result<RemoteResponse, SubmitError>;
}

/// Submitter that POSTs to the HubSpot Forms API.
///
/// The underlying `reqwest::Client` pools connections, so one instance is
/// shared by every request the server handles.
#[derive(Clone)]
pub struct HubSpotClient {
    client: Client,
    endpoint: Url,
}

impl HubSpotClient {
    /// Create a client for the endpoint described by `config`.
    pub fn new(config: &Config) -> Result<Self, SubmitError> {
        let client = Client::builder().build()?;
        Self::with_client(client, config)
    }

    /// Create a client reusing an existing `reqwest::Client`.
    pub fn with_client(client: Client, config: &Config) -> Result<Self, SubmitError> {
        let url = config.submit_url();
        let endpoint = Url::parse(&url).map_err(|source| SubmitError::InvalidEndpoint {
            url: url.clone(),
            source,
        })?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl FormSubmitter for HubSpotClient {
    async fn submit(&self, submission: &HubSpotSubmission) -> Result<RemoteResponse, SubmitError> {
        info!(
            endpoint = %self.endpoint,
            field_count = submission.fields.len(),
            "hubspot_submit_starting"
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(serde_json::to_vec(submission).map_err(SubmitError::Encode)?)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    error!(error = %e, "hubspot_submit_timeout");
                } else if e.is_connect() {
                    error!(error = %e, "hubspot_submit_connect_error");
                } else {
                    error!(error = %e, "hubspot_submit_error");
                }
                SubmitError::Transport(e)
            })?;

        let status = response.status();
        let bytes = response.bytes().await?;

        let body: Value =
            serde_json::from_slice(&bytes).map_err(|source| SubmitError::InvalidResponse {
                status: status.as_u16(),
                source,
            })?;

        info!(
            status_code = status.as_u16(),
            body = %body,
            "hubspot_response"
        );

        Ok(RemoteResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submission::{build_submission, WebhookPayload};
    use mockito::Matcher;
    use serde_json::json;

    fn config_for(server: &mockito::ServerGuard) -> Config {
        Config {
            hubspot_api_base: server.url(),
            hubspot_portal_id: "123".to_string(),
            hubspot_form_id: "form-guid".to_string(),
            ..Config::default()
        }
    }

    fn sample_submission() -> HubSpotSubmission {
        let payload = WebhookPayload::from_envelope(json!({
            "data": { "firstName": "Ann", "email": "a@x.com" }
        }));
        build_submission(&payload, &Config::default())
    }

    #[test]
    fn test_client_endpoint() {
        let client = HubSpotClient::new(&Config::default()).unwrap();
        assert_eq!(client.endpoint().host_str(), Some("api.hsforms.com"));
        assert!(client
            .endpoint()
            .path()
            .ends_with("/8070371/5efde115-8a41-4e38-8176-4b121279ff42"));
    }

    #[test]
    fn test_client_rejects_invalid_endpoint() {
        let config = Config {
            hubspot_api_base: "not a url".to_string(),
            ..Config::default()
        };
        assert!(matches!(
            HubSpotClient::new(&config),
            Err(SubmitError::InvalidEndpoint { .. })
        ));
    }

    #[tokio::test]
    async fn test_submit_posts_json_document() {
        let mut server = mockito::Server::new_async().await;
        let submission = sample_submission();

        let mock = server
            .mock("POST", "/submissions/v3/integration/submit/123/form-guid")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(serde_json::to_value(&submission).unwrap()))
            .with_status(200)
            .with_body(r#"{"inlineMessage":"Thanks for submitting the form."}"#)
            .create_async()
            .await;

        let client = HubSpotClient::new(&config_for(&server)).unwrap();
        let response = client.submit(&submission).await.unwrap();

        mock.assert_async().await;
        assert!(response.is_success());
        assert_eq!(
            response.body,
            json!({ "inlineMessage": "Thanks for submitting the form." })
        );
    }

    #[tokio::test]
    async fn test_submit_returns_rejection_as_response() {
        let mut server = mockito::Server::new_async().await;
        let rejection = json!({
            "status": "error",
            "message": "The request is not valid",
            "errors": [{ "message": "Error in 'fields.email'. Invalid email address", "errorType": "INVALID_EMAIL" }]
        });

        let _m = server
            .mock("POST", "/submissions/v3/integration/submit/123/form-guid")
            .with_status(400)
            .with_body(rejection.to_string())
            .create_async()
            .await;

        let client = HubSpotClient::new(&config_for(&server)).unwrap();
        let response = client.submit(&sample_submission()).await.unwrap();

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert!(!response.is_success());
        assert_eq!(response.body, rejection);
    }

    #[tokio::test]
    async fn test_submit_non_json_body_is_error() {
        let mut server = mockito::Server::new_async().await;

        let _m = server
            .mock("POST", "/submissions/v3/integration/submit/123/form-guid")
            .with_status(502)
            .with_body("<html>Bad Gateway</html>")
            .create_async()
            .await;

        let client = HubSpotClient::new(&config_for(&server)).unwrap();
        let err = client.submit(&sample_submission()).await.unwrap_err();

        assert!(matches!(err, SubmitError::InvalidResponse { status: 502, .. }));
    }

    #[tokio::test]
    async fn test_submit_connection_refused_is_transport_error() {
        let config = Config {
            hubspot_api_base: "http://127.0.0.1:1".to_string(),
            ..Config::default()
        };

        let client = HubSpotClient::new(&config).unwrap();
        let err = client.submit(&sample_submission()).await.unwrap_err();

        assert!(matches!(err, SubmitError::Transport(_)));
    }
}

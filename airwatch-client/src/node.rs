//! Client for the node's channel measurement endpoint.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use airwatch_types::{ChannelDataPayload, API_VERSION};

use crate::ClientError;

/// Default bound on the number of records requested per fetch.
///
/// Keeps chart density reasonable on nodes that have been measuring for a
/// long time. Passed to the node as the `limit` query parameter, so the
/// bounding happens server-side, not in the transform.
pub const DEFAULT_CHART_LIMIT: u32 = 250;

/// Client for a survey node's measurement API.
#[derive(Debug, Clone)]
pub struct NodeClient {
    client: Client,
    endpoint: String,
}

impl NodeClient {
    /// Create a new builder for configuring the client.
    pub fn builder() -> NodeClientBuilder {
        NodeClientBuilder::default()
    }

    /// The configured node endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the latest measurement data for a channel.
    ///
    /// `limit` bounds the number of records the node returns; `None` leaves
    /// the result set unbounded.
    pub async fn latest_channel_data(
        &self,
        channel: u32,
        limit: Option<u32>,
    ) -> Result<ChannelDataPayload, ClientError> {
        let url = channel_url(&self.endpoint, channel, limit);

        let response = self.client.get(&url).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(ClientError::Http(format!(
                "Channel {} not found on node",
                channel
            )));
        }

        if !response.status().is_success() {
            return Err(ClientError::Http(format!(
                "API returned status {}",
                response.status()
            )));
        }

        let body = response.text().await?;
        debug!(channel, bytes = body.len(), payload = %body, "raw channel payload");

        serde_json::from_str(&body).map_err(|e| ClientError::Parse(e.to_string()))
    }
}

/// Builder for [`NodeClient`].
#[derive(Debug, Default)]
pub struct NodeClientBuilder {
    endpoint: Option<String>,
    timeout: Option<Duration>,
}

impl NodeClientBuilder {
    /// Set the node endpoint (e.g., "http://node.local:8080").
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the request timeout (default: 10 seconds).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client.
    pub fn build(self) -> NodeClient {
        let timeout = self.timeout.unwrap_or(Duration::from_secs(10));

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        NodeClient {
            client,
            endpoint: self
                .endpoint
                .unwrap_or_else(|| "http://localhost:8080".to_string()),
        }
    }
}

// Build the measurement URL for a channel, with optional result bounding
fn channel_url(endpoint: &str, channel: u32, limit: Option<u32>) -> String {
    let mut url = format!(
        "{}/api/{}/channel/{}/latest",
        endpoint.trim_end_matches('/'),
        API_VERSION,
        channel
    );
    if let Some(limit) = limit {
        url.push_str(&format!("?limit={}", limit));
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let client = NodeClient::builder().build();
        assert_eq!(client.endpoint(), "http://localhost:8080");
    }

    #[test]
    fn test_builder_custom() {
        let client = NodeClient::builder()
            .endpoint("http://node.local:9000")
            .timeout(Duration::from_secs(2))
            .build();

        assert_eq!(client.endpoint(), "http://node.local:9000");
    }

    #[test]
    fn test_channel_url() {
        assert_eq!(
            channel_url("http://localhost:8080", 6, None),
            "http://localhost:8080/api/1.0/channel/6/latest"
        );
        assert_eq!(
            channel_url("http://localhost:8080/", 11, Some(250)),
            "http://localhost:8080/api/1.0/channel/11/latest?limit=250"
        );
    }

    #[test]
    fn test_parse_error_classification() {
        let err = serde_json::from_str::<ChannelDataPayload>("not json")
            .map_err(|e| ClientError::Parse(e.to_string()))
            .unwrap_err();
        assert!(matches!(err, ClientError::Parse(_)));
    }
}

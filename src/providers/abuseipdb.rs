//! AbuseIPDB reputation provider.

use super::{LookupResult, ProviderError, ReputationProvider};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::net::IpAddr;
use std::time::Duration;
use tracing::{debug, warn};

/// AbuseIPDB `check` endpoint.
pub const CHECK_ENDPOINT_URL: &str = "https://api.abuseipdb.com/api/v2/check";

/// AbuseIPDB API response.
#[derive(Debug, Deserialize)]
struct AbuseIPDBResponse {
    data: LookupResult,
}

/// AbuseIPDB reputation provider.
pub struct AbuseIPDBProvider {
    endpoint: String,
    client: Client,
}

impl AbuseIPDBProvider {
    /// Create a new AbuseIPDB provider whose requests are bounded by `timeout`.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, ProviderError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }

    /// Endpoint this provider queries.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Decode a response body and unwrap its `data` envelope.
fn parse_response(body: &str) -> Result<LookupResult, ProviderError> {
    let response: AbuseIPDBResponse = serde_json::from_str(body).map_err(|e| {
        ProviderError::InvalidResponse(format!("Failed to parse response: {}", e))
    })?;
    Ok(response.data)
}

#[async_trait]
impl ReputationProvider for AbuseIPDBProvider {
    async fn check(&self, ip: &IpAddr, api_key: &str) -> Result<LookupResult, ProviderError> {
        debug!(ip = %ip, "Querying AbuseIPDB");

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("ipAddress", ip.to_string())])
            .header("Key", api_key)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            warn!(ip = %ip, "AbuseIPDB rate limit exceeded");
        }
        if !status.is_success() {
            return Err(ProviderError::Status(status));
        }

        let body = response.text().await?;
        let data = parse_response(&body)?;

        debug!(
            ip = %ip,
            score = data.abuse_confidence_score,
            reports = data.total_reports,
            "AbuseIPDB lookup complete"
        );

        Ok(data)
    }

    fn name(&self) -> &str {
        "abuseipdb"
    }
}

//! IP reputation providers.

pub mod abuseipdb;

use async_trait::async_trait;
use serde::Deserialize;
use std::net::IpAddr;

/// Raw lookup data returned by a reputation service for one address.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LookupResult {
    /// Address echoed back by the service.
    #[serde(rename = "ipAddress", default)]
    pub ip_address: Option<String>,

    /// Abuse confidence score (0-100, higher = worse).
    #[serde(rename = "abuseConfidenceScore")]
    pub abuse_confidence_score: f64,

    /// Total number of reports.
    #[serde(rename = "totalReports", default)]
    pub total_reports: u64,

    /// Country code.
    #[serde(rename = "countryCode", default)]
    pub country_code: Option<String>,

    /// ISP name.
    #[serde(default)]
    pub isp: Option<String>,

    /// Whether the address is publicly routable.
    #[serde(rename = "isPublic", default)]
    pub is_public: Option<bool>,
}

/// Error from a reputation provider.
#[derive(Debug)]
pub enum ProviderError {
    /// HTTP request failed before a response arrived.
    Http(reqwest::Error),
    /// Timeout.
    Timeout,
    /// Non-success HTTP status.
    Status(reqwest::StatusCode),
    /// Invalid response.
    InvalidResponse(String),
}

impl ProviderError {
    /// Short name of the failure class, used in status messages.
    pub fn kind(&self) -> &'static str {
        match self {
            ProviderError::Http(_) => "ConnectionError",
            ProviderError::Timeout => "Timeout",
            ProviderError::Status(_) => "HTTPError",
            ProviderError::InvalidResponse(_) => "InvalidResponse",
        }
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderError::Http(e) => write!(f, "HTTP error: {}", e),
            ProviderError::Timeout => write!(f, "Request timed out"),
            ProviderError::Status(status) => write!(f, "HTTP status {}", status),
            ProviderError::InvalidResponse(msg) => write!(f, "Invalid response: {}", msg),
        }
    }
}

impl std::error::Error for ProviderError {}

impl From<reqwest::Error> for ProviderError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ProviderError::Timeout
        } else {
            ProviderError::Http(e)
        }
    }
}

/// Trait for IP reputation lookups.
#[async_trait]
pub trait ReputationProvider: Send + Sync {
    /// Look up the reputation of an IP address. Exactly one attempt is made.
    async fn check(&self, ip: &IpAddr, api_key: &str) -> Result<LookupResult, ProviderError>;

    /// Provider name for logging.
    fn name(&self) -> &str;
}

//! Public result objects built from raw lookups.

use crate::providers::LookupResult;
use crate::risk::RiskLevel;
use serde::Serialize;

/// Which optional fields to include in an [`IpReport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    pub include_ip: bool,
    pub include_public: bool,
}

impl FormatOptions {
    /// Single-address output: address and public flag included.
    pub fn single() -> Self {
        Self {
            include_ip: true,
            include_public: true,
        }
    }

    /// Batch output: the address is the map key and the public flag is dropped.
    pub fn batch() -> Self {
        Self {
            include_ip: false,
            include_public: false,
        }
    }
}

/// Formatted reputation result for one address.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IpReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,

    pub risk_level: RiskLevel,

    pub abuse_confidence_score: f64,

    pub total_reports: u64,

    pub country_code: Option<String>,

    pub isp: Option<String>,

    /// Outer `None` omits the key; inner `None` renders as `null`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<Option<bool>>,
}

impl IpReport {
    /// Shape a raw lookup into its public form.
    pub fn from_lookup(data: &LookupResult, threshold: f64, options: FormatOptions) -> Self {
        let score = data.abuse_confidence_score;

        Self {
            ip: data.ip_address.clone().filter(|_| options.include_ip),
            risk_level: RiskLevel::classify(score, threshold),
            abuse_confidence_score: score,
            total_reports: data.total_reports,
            country_code: data.country_code.clone(),
            isp: data.isp.clone(),
            is_public: options.include_public.then_some(data.is_public),
        }
    }
}

//! Batch reputation checks.
//!
//! Validates a comma-separated address list, looks up each distinct valid
//! address once, and folds successes and failures into a single report.

use crate::input::{parse_ip, split_addresses};
use crate::output::{codes, Output};
use crate::providers::ReputationProvider;
use crate::report::{FormatOptions, IpReport};
use crate::risk::RiskLevel;
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashSet;
use std::net::IpAddr;
use tracing::{debug, info, warn};

pub const INVALID_IP_REASON: &str = "Invalid IP address format";
pub const MISSING_API_KEY_REASON: &str = "Missing API Key";
pub const API_ERROR_REASON: &str = "API error";

/// Count of successful lookups per risk tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RiskCounts {
    #[serde(rename = "HIGH")]
    pub high: usize,
    #[serde(rename = "MEDIUM")]
    pub medium: usize,
    #[serde(rename = "LOW")]
    pub low: usize,
}

impl RiskCounts {
    fn record(&mut self, level: RiskLevel) {
        match level {
            RiskLevel::High => self.high += 1,
            RiskLevel::Medium => self.medium += 1,
            RiskLevel::Low => self.low += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.high + self.medium + self.low
    }
}

/// Batch totals. `successful + failed == total`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
    pub risk_counts: RiskCounts,
}

/// Per-address results and errors plus the summary. Keys keep first-seen order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchReport {
    pub summary: BatchSummary,
    pub results: IndexMap<String, IpReport>,
    pub errors: IndexMap<String, String>,
}

/// Candidates split by validity, each distinct address kept once.
#[derive(Debug, Default)]
struct Partition {
    valid: Vec<(String, IpAddr)>,
    invalid: Vec<String>,
}

fn partition(candidates: Vec<String>) -> Partition {
    let mut seen = HashSet::new();
    let mut partition = Partition::default();

    for candidate in candidates {
        if !seen.insert(candidate.clone()) {
            debug!(candidate = %candidate, "Skipping duplicate address");
            continue;
        }
        match parse_ip(&candidate) {
            Some(ip) => partition.valid.push((candidate, ip)),
            None => partition.invalid.push(candidate),
        }
    }

    partition
}

/// Map the mix of outcomes to an exit code and status message.
fn derive_status(valid: usize, successful: usize, failed: usize) -> (i32, &'static str) {
    if valid == 0 {
        (codes::INPUT_ERROR, "failed")
    } else if successful == 0 {
        (codes::API_ERROR, "failed")
    } else if failed > 0 {
        (codes::SUCCESS, "partial_success")
    } else {
        (codes::SUCCESS, "success")
    }
}

/// Check every address in `raw` and build the batch output.
///
/// Lookups run one at a time in first-seen order. A failed lookup is recorded
/// against its address and never stops the batch. With no usable `api_key`,
/// every valid address is reported as an error and nothing is sent.
pub async fn check_batch(
    raw: Option<&str>,
    api_key: Option<&str>,
    threshold: f64,
    provider: &dyn ReputationProvider,
) -> Output<BatchReport> {
    let Partition { valid, invalid } = partition(split_addresses(raw));

    let mut results = IndexMap::new();
    let mut errors = IndexMap::new();
    let mut risk_counts = RiskCounts::default();

    for candidate in &invalid {
        errors.insert(candidate.clone(), INVALID_IP_REASON.to_string());
    }

    match api_key.filter(|key| !key.trim().is_empty()) {
        None => {
            if !valid.is_empty() {
                warn!(addresses = valid.len(), "No API key provided, skipping lookups");
            }
            for (address, _) in &valid {
                errors.insert(address.clone(), MISSING_API_KEY_REASON.to_string());
            }
        }
        Some(api_key) => {
            for (address, ip) in &valid {
                match provider.check(ip, api_key).await {
                    Ok(data) => {
                        let report =
                            IpReport::from_lookup(&data, threshold, FormatOptions::batch());
                        risk_counts.record(report.risk_level);
                        results.insert(address.clone(), report);
                    }
                    Err(e) => {
                        warn!(
                            provider = provider.name(),
                            ip = %ip,
                            error = %e,
                            "Lookup failed"
                        );
                        errors.insert(address.clone(), API_ERROR_REASON.to_string());
                    }
                }
            }
        }
    }

    let summary = BatchSummary {
        total: valid.len() + invalid.len(),
        successful: results.len(),
        failed: errors.len(),
        risk_counts,
    };
    let (code, message) = derive_status(valid.len(), summary.successful, summary.failed);

    info!(
        total = summary.total,
        successful = summary.successful,
        failed = summary.failed,
        status = message,
        "Batch check complete"
    );

    Output::new(
        code,
        message,
        Some(BatchReport {
            summary,
            results,
            errors,
        }),
    )
}

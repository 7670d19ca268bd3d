//! Single-address reputation check.

use crate::input::parse_ip;
use crate::output::{codes, Output};
use crate::providers::{ProviderError, ReputationProvider};
use crate::report::{FormatOptions, IpReport};
use tracing::{info, warn};

/// Check one address and build the output document.
///
/// Input problems exit with code 1 before the credential is looked at. A
/// missing credential or any lookup failure exits with code 2. Every failure
/// carries an empty payload.
pub async fn check_single(
    ip: Option<&str>,
    api_key: Option<&str>,
    threshold: f64,
    provider: &dyn ReputationProvider,
) -> Output<IpReport> {
    let raw = match ip {
        Some(raw) if !raw.trim().is_empty() => raw,
        _ => return Output::failed(codes::INPUT_ERROR, "failed: missing IP address"),
    };

    let Some(addr) = parse_ip(raw.trim()) else {
        return Output::failed(
            codes::INPUT_ERROR,
            format!("failed: invalid ip address '{}'", raw),
        );
    };

    let api_key = match api_key {
        Some(key) if !key.trim().is_empty() => key,
        _ => return Output::failed(codes::API_ERROR, "failed: missing API key"),
    };

    let lookup = provider.check(&addr, api_key).await.and_then(|data| {
        if data.ip_address.is_some() {
            Ok(data)
        } else {
            Err(ProviderError::InvalidResponse("response has no ipAddress".to_string()))
        }
    });

    match lookup {
        Ok(data) => {
            let report = IpReport::from_lookup(&data, threshold, FormatOptions::single());
            info!(ip = %addr, risk = %report.risk_level, "Check complete");
            Output::new(codes::SUCCESS, "success", Some(report))
        }
        Err(e) => {
            warn!(provider = provider.name(), ip = %addr, error = %e, "Lookup failed");
            Output::failed(codes::API_ERROR, format!("failed: API error ({})", e.kind()))
        }
    }
}
